// src/telas/servicos.rs

use crate::common::error::AppError;
use crate::models::RespostaMensagem;
use crate::models::servico::{CadastroServicoPayload, Servico};
use crate::services::servico::ServicoService;
use crate::telas::EstadoTela;

/// Tela de serviços da loja.
pub struct ServicosTela {
    service: ServicoService,
    loja_id: Option<i64>,
    estado: EstadoTela,
    servicos: Vec<Servico>,
}

impl ServicosTela {
    pub fn nova(service: ServicoService) -> Self {
        Self {
            service,
            loja_id: None,
            estado: EstadoTela::default(),
            servicos: Vec::new(),
        }
    }

    pub fn definir_loja(&mut self, loja_id: i64) {
        self.loja_id = Some(loja_id);
    }

    pub async fn carregar(&mut self) {
        let Some(id) = self.loja_id else {
            return;
        };
        self.estado = EstadoTela::Carregando;
        let resultado = self.service.listar(id).await;
        self.aplicar_resultado(resultado);
    }

    fn aplicar_resultado(&mut self, resultado: Result<Vec<Servico>, AppError>) {
        match resultado {
            Ok(itens) => {
                self.estado = EstadoTela::de_lista(&itens);
                self.servicos = itens;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar serviços");
                self.estado = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    pub fn exibidos(&self) -> &[Servico] {
        &self.servicos
    }

    pub async fn cadastrar(
        &mut self,
        payload: CadastroServicoPayload,
    ) -> Result<RespostaMensagem, AppError> {
        let loja_id = self.loja_id.ok_or(AppError::SessaoAusente)?;
        self.service.cadastrar(loja_id, payload).await
    }

    pub async fn remover(&mut self, servico_id: i64) -> Result<(), AppError> {
        let loja_id = self.loja_id.ok_or(AppError::SessaoAusente)?;
        self.service.remover(loja_id, servico_id).await?;
        self.aplicar_remocao(servico_id);
        Ok(())
    }

    fn aplicar_remocao(&mut self, servico_id: i64) {
        self.servicos.retain(|s| s.id != servico_id);
        self.estado = EstadoTela::de_lista(&self.servicos);
    }

    pub fn estado(&self) -> &EstadoTela {
        &self.estado
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn servico(id: i64, nome: &str) -> Servico {
        Servico {
            id,
            nome_servico: nome.into(),
            preco: Decimal::new(800, 1),
            descricao: "Ajuste geral".into(),
        }
    }

    #[test]
    fn remocao_preserva_os_demais() {
        let service = crate::config::testes::estado_simulado().servico_service;
        let mut tela = ServicosTela::nova(service);
        tela.definir_loja(1);
        tela.aplicar_resultado(Ok(vec![servico(1, "Freios"), servico(2, "Pneus")]));

        tela.aplicar_remocao(1);
        assert_eq!(tela.exibidos().len(), 1);
        assert_eq!(tela.exibidos()[0].id, 2);
    }

    #[tokio::test]
    async fn carregar_em_modo_simulado_traz_amostras() {
        let service = crate::config::testes::estado_simulado().servico_service;
        let mut tela = ServicosTela::nova(service);
        tela.definir_loja(1);
        tela.carregar().await;
        assert_eq!(*tela.estado(), EstadoTela::Pronta);
        assert_eq!(tela.exibidos().len(), 3);
    }
}
