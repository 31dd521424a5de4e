// src/http/simulacao.rs
//
// Transporte simulado: respostas prontas por (trecho do caminho,
// método), para manter o aplicativo demonstrável com o backend fora do
// ar. Registros e logins gravam no armazenamento local de sessão como
// um "banco de dados" improvisado.

use async_trait::async_trait;
use rand::Rng;
use reqwest::Method;
use serde_json::{Value, json};

use crate::common::error::AppError;
use crate::http::transporte::{Corpo, Requisicao, Transporte};
use crate::sessao::{CHAVE_CLIENTE_ID, CHAVE_LOJA_ID, SessaoStore};

/// Chave do registro simulado de cliente.
pub const CHAVE_CLIENTE_SIMULADO: &str = "cliente_simulado";
/// Chave do registro simulado de loja.
pub const CHAVE_LOJA_SIMULADA: &str = "loja_simulada";

pub struct TransporteSimulado {
    sessao: SessaoStore,
}

impl TransporteSimulado {
    pub fn new(sessao: SessaoStore) -> Self {
        Self { sessao }
    }

    fn id_aleatorio() -> i64 {
        rand::rng().random_range(1..=1000)
    }

    fn gravar_corpo(&self, chave: &str, corpo: &Corpo) -> Result<(), AppError> {
        if let Corpo::Json(valor) = corpo {
            self.sessao.definir(chave, &valor.to_string())?;
        }
        Ok(())
    }
}

#[async_trait]
impl Transporte for TransporteSimulado {
    async fn executar(&self, requisicao: Requisicao) -> Result<Value, AppError> {
        let caminho = requisicao.caminho.as_str();
        let metodo = &requisicao.metodo;
        tracing::debug!(%metodo, caminho, "simulando resposta");

        // Registro de cliente: guarda o payload como banco improvisado
        if caminho.contains("/cliente/registro") && metodo == &Method::POST {
            self.gravar_corpo(CHAVE_CLIENTE_SIMULADO, &requisicao.corpo)?;
            return Ok(json!({
                "mensagem": "Cliente registrado com sucesso!",
                "cliente_id": Self::id_aleatorio(),
            }));
        }

        // Login de cliente: persiste um id novo na sessão
        if caminho.contains("/cliente/login") && metodo == &Method::POST {
            let id = Self::id_aleatorio();
            self.sessao.definir(CHAVE_CLIENTE_ID, &id.to_string())?;
            return Ok(json!({
                "mensagem": "Login realizado com sucesso!",
                "cliente_id": id,
            }));
        }

        if caminho.contains("/loja/registro") && metodo == &Method::POST {
            self.gravar_corpo(CHAVE_LOJA_SIMULADA, &requisicao.corpo)?;
            return Ok(json!({
                "mensagem": "Loja registrada com sucesso!",
                "loja_id": Self::id_aleatorio(),
            }));
        }

        if caminho.contains("/loja/login") && metodo == &Method::POST {
            let id = Self::id_aleatorio();
            self.sessao.definir(CHAVE_LOJA_ID, &id.to_string())?;
            return Ok(json!({
                "mensagem": "Login realizado com sucesso!",
                "loja_id": id,
            }));
        }

        if caminho.contains("/produtos") && metodo == &Method::GET {
            return Ok(json!([
                {
                    "id": 1,
                    "nome_produto": "Capacete MTB",
                    "preco": 199.9,
                    "quantidade_estoque": 15,
                    "image_path": "/placeholder.svg?height=80&width=80",
                },
                {
                    "id": 2,
                    "nome_produto": "Luvas de Ciclismo",
                    "preco": 89.9,
                    "quantidade_estoque": 30,
                    "image_path": "/placeholder.svg?height=80&width=80",
                },
                {
                    "id": 3,
                    "nome_produto": "Bomba de Ar",
                    "preco": 59.9,
                    "quantidade_estoque": 20,
                    "image_path": "/placeholder.svg?height=80&width=80",
                },
            ]));
        }

        if caminho.contains("/horarios") && metodo == &Method::GET {
            return Ok(json!([
                { "id": 1, "horario": "2023-05-15T14:30:00", "is_disponivel": true },
                { "id": 2, "horario": "2023-05-16T10:00:00", "is_disponivel": false },
                { "id": 3, "horario": "2023-05-17T16:45:00", "is_disponivel": true },
            ]));
        }

        if caminho.contains("/servicos") && metodo == &Method::GET {
            return Ok(json!([
                {
                    "id": 1,
                    "nome_servico": "Manutenção de Freios",
                    "preco": 80.0,
                    "descricao": "Ajuste e manutenção completa do sistema de freios.",
                },
                {
                    "id": 2,
                    "nome_servico": "Troca de Pneus",
                    "preco": 50.0,
                    "descricao": "Substituição de pneus e câmaras.",
                },
                {
                    "id": 3,
                    "nome_servico": "Revisão Completa",
                    "preco": 150.0,
                    "descricao": "Revisão geral da bicicleta, incluindo ajustes e lubrificação.",
                },
            ]));
        }

        // Perfil da loja: qualquer GET em /loja/... que não seja lista
        if caminho.contains("/loja/") && metodo == &Method::GET {
            return Ok(json!({
                "nome_loja": "Minha Loja de Bikes",
                "cnpj": "12.345.678/0001-90",
                "endereco": "Av. das Bicicletas, 123",
                "cep": "01234-567",
                "descricao": "Loja especializada em bicicletas e acessórios para ciclismo.",
                "foto_path": null,
            }));
        }

        // Resposta padrão para os demais endpoints
        Ok(json!({ "mensagem": "Operação simulada com sucesso!" }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessao_temporaria() -> (tempfile::TempDir, SessaoStore) {
        let dir = tempfile::tempdir().unwrap();
        let sessao = SessaoStore::abrir(dir.path().join("sessao.json")).unwrap();
        (dir, sessao)
    }

    fn requisicao(metodo: Method, caminho: &str) -> Requisicao {
        Requisicao {
            metodo,
            caminho: caminho.to_string(),
            corpo: Corpo::Vazio,
        }
    }

    #[tokio::test]
    async fn login_simulado_persiste_id_na_sessao() {
        let (_dir, sessao) = sessao_temporaria();
        let transporte = TransporteSimulado::new(sessao.clone());

        let resposta = transporte
            .executar(requisicao(Method::POST, "/cliente/login"))
            .await
            .unwrap();

        let id = resposta["cliente_id"].as_i64().unwrap();
        assert!((1..=1000).contains(&id));
        assert_eq!(
            sessao.obter(CHAVE_CLIENTE_ID).as_deref(),
            Some(id.to_string().as_str())
        );
    }

    #[tokio::test]
    async fn registro_simulado_grava_payload_como_banco_improvisado() {
        let (_dir, sessao) = sessao_temporaria();
        let transporte = TransporteSimulado::new(sessao.clone());

        let corpo = json!({ "nome": "Ana", "cpf": "12345678901" });
        let resposta = transporte
            .executar(Requisicao {
                metodo: Method::POST,
                caminho: "/cliente/registro".into(),
                corpo: Corpo::Json(corpo.clone()),
            })
            .await
            .unwrap();

        assert_eq!(resposta["mensagem"], "Cliente registrado com sucesso!");
        let gravado = sessao.obter(CHAVE_CLIENTE_SIMULADO).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&gravado).unwrap(), corpo);
    }

    #[tokio::test]
    async fn listas_simuladas_tem_amostras() {
        let (_dir, sessao) = sessao_temporaria();
        let transporte = TransporteSimulado::new(sessao);

        let produtos = transporte
            .executar(requisicao(Method::GET, "/loja/1/produtos"))
            .await
            .unwrap();
        assert_eq!(produtos.as_array().unwrap().len(), 3);

        let horarios = transporte
            .executar(requisicao(Method::GET, "/loja/1/servico/2/horarios"))
            .await
            .unwrap();
        assert!(horarios.as_array().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn get_de_perfil_nao_colide_com_listas() {
        let (_dir, sessao) = sessao_temporaria();
        let transporte = TransporteSimulado::new(sessao);

        let perfil = transporte
            .executar(requisicao(Method::GET, "/loja/7"))
            .await
            .unwrap();
        assert_eq!(perfil["nome_loja"], "Minha Loja de Bikes");
    }

    #[tokio::test]
    async fn endpoint_desconhecido_recebe_mensagem_padrao() {
        let (_dir, sessao) = sessao_temporaria();
        let transporte = TransporteSimulado::new(sessao);

        let resposta = transporte
            .executar(requisicao(Method::DELETE, "/loja/1/produto/2"))
            .await
            .unwrap();
        assert_eq!(resposta["mensagem"], "Operação simulada com sucesso!");
    }
}
