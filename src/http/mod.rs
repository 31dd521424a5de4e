// src/http/mod.rs
//
// Cliente HTTP do aplicativo: uma URL base fixa, timeout único para
// todas as chamadas e um único ponto onde falhas de rede viram erro
// tipado (ou resposta simulada, conforme o modo de transporte).

pub mod simulacao;
pub mod transporte;

use std::sync::Arc;

use anyhow::Context;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::common::error::AppError;
use crate::config::AppConfig;
use crate::http::simulacao::TransporteSimulado;
use crate::http::transporte::{Corpo, ModoTransporte, Requisicao, Transporte, TransporteReal};
use crate::sessao::SessaoStore;

#[derive(Clone)]
pub struct ApiClient {
    principal: Arc<dyn Transporte>,
    // Transporte de reserva, usado só quando o principal falha SEM
    // resposta do servidor. Erros 4xx/5xx nunca caem aqui.
    reserva: Option<Arc<dyn Transporte>>,
}

impl ApiClient {
    pub fn novo(config: &AppConfig, sessao: SessaoStore) -> Result<Self, AppError> {
        let simulado = || Arc::new(TransporteSimulado::new(sessao.clone()));

        let (principal, reserva): (Arc<dyn Transporte>, Option<Arc<dyn Transporte>>) =
            match config.modo_transporte {
                ModoTransporte::Simulado => (simulado(), None),
                ModoTransporte::Real => (Self::transporte_real(config)?, None),
                ModoTransporte::RealComSimulacao => {
                    (Self::transporte_real(config)?, Some(simulado()))
                }
            };

        Ok(Self { principal, reserva })
    }

    fn transporte_real(config: &AppConfig) -> Result<Arc<dyn Transporte>, AppError> {
        let base = Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .context("falha ao construir o cliente HTTP")?;

        Ok(Arc::new(TransporteReal::new(client, base)))
    }

    /// Executa uma chamada JSON. Em modo com reserva, uma falha de
    /// transporte é substituída pela resposta simulada.
    pub async fn requisitar(
        &self,
        metodo: Method,
        caminho: &str,
        corpo: Option<Value>,
    ) -> Result<Value, AppError> {
        let requisicao = Requisicao {
            metodo: metodo.clone(),
            caminho: caminho.to_string(),
            corpo: corpo.clone().map_or(Corpo::Vazio, Corpo::Json),
        };

        let resultado = self.principal.executar(requisicao).await;
        match (&resultado, &self.reserva) {
            (Err(erro), Some(reserva)) if erro.eh_transporte() => {
                tracing::warn!(%erro, caminho, "falha de transporte; usando resposta simulada");
                reserva
                    .executar(Requisicao {
                        metodo,
                        caminho: caminho.to_string(),
                        corpo: corpo.map_or(Corpo::Vazio, Corpo::Json),
                    })
                    .await
            }
            _ => resultado,
        }
    }

    /// Executa uma chamada multipart. O formulário não é replicável, a
    /// reserva simulada recebe só (método, caminho).
    pub async fn requisitar_multipart(
        &self,
        metodo: Method,
        caminho: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, AppError> {
        let requisicao = Requisicao {
            metodo: metodo.clone(),
            caminho: caminho.to_string(),
            corpo: Corpo::Multipart(form),
        };

        let resultado = self.principal.executar(requisicao).await;
        match (&resultado, &self.reserva) {
            (Err(erro), Some(reserva)) if erro.eh_transporte() => {
                tracing::warn!(%erro, caminho, "falha de transporte; usando resposta simulada");
                reserva
                    .executar(Requisicao {
                        metodo,
                        caminho: caminho.to_string(),
                        corpo: Corpo::Vazio,
                    })
                    .await
            }
            _ => resultado,
        }
    }
}

/// Desembrulha o envelope de lista do backend: ou um array puro, ou um
/// objeto com exatamente o campo nomeado. Qualquer outro formato é erro
/// — nunca uma lista vazia silenciosa.
pub fn extrair_lista(valor: Value, campo: &str) -> Result<Vec<Value>, AppError> {
    match valor {
        Value::Array(itens) => Ok(itens),
        Value::Object(mut mapa) => match mapa.remove(campo) {
            Some(Value::Array(itens)) => Ok(itens),
            Some(outro) => Err(AppError::RespostaInvalida(format!(
                "campo '{campo}' não é uma lista: {outro}"
            ))),
            None => Err(AppError::RespostaInvalida(format!(
                "resposta sem o campo de lista '{campo}'"
            ))),
        },
        outro => Err(AppError::RespostaInvalida(format!(
            "esperava lista, recebi: {outro}"
        ))),
    }
}

/// `extrair_lista` + desserialização dos itens.
pub fn desserializar_lista<T: DeserializeOwned>(
    valor: Value,
    campo: &str,
) -> Result<Vec<T>, AppError> {
    extrair_lista(valor, campo)?
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(AppError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lista_pura_e_lista_embrulhada_sao_aceitas() {
        let pura = json!([1, 2, 3]);
        assert_eq!(extrair_lista(pura, "produtos").unwrap().len(), 3);

        let embrulhada = json!({ "produtos": [1, 2] });
        assert_eq!(extrair_lista(embrulhada, "produtos").unwrap().len(), 2);
    }

    #[test]
    fn formato_estranho_falha_alto() {
        let sem_campo = json!({ "outra_coisa": [] });
        assert!(matches!(
            extrair_lista(sem_campo, "produtos"),
            Err(AppError::RespostaInvalida(_))
        ));

        let escalar = json!(42);
        assert!(matches!(
            extrair_lista(escalar, "produtos"),
            Err(AppError::RespostaInvalida(_))
        ));

        let campo_nao_lista = json!({ "produtos": "nada" });
        assert!(matches!(
            extrair_lista(campo_nao_lista, "produtos"),
            Err(AppError::RespostaInvalida(_))
        ));
    }
}
