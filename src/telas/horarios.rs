// src/telas/horarios.rs

use chrono::NaiveDateTime;

use crate::common::error::AppError;
use crate::models::servico::Horario;
use crate::services::servico::ServicoService;
use crate::telas::EstadoTela;

/// Tela de horários de um serviço da loja: listagem e inclusão de novos
/// horários de atendimento.
pub struct HorariosTela {
    service: ServicoService,
    loja_id: i64,
    servico_id: i64,
    estado: EstadoTela,
    horarios: Vec<Horario>,
}

impl HorariosTela {
    pub fn nova(service: ServicoService, loja_id: i64, servico_id: i64) -> Self {
        Self {
            service,
            loja_id,
            servico_id,
            estado: EstadoTela::default(),
            horarios: Vec::new(),
        }
    }

    pub async fn carregar(&mut self) {
        self.estado = EstadoTela::Carregando;
        let resultado = self
            .service
            .listar_horarios(self.loja_id, self.servico_id)
            .await;
        self.aplicar_resultado(resultado);
    }

    fn aplicar_resultado(&mut self, resultado: Result<Vec<Horario>, AppError>) {
        match resultado {
            Ok(itens) => {
                self.estado = EstadoTela::de_lista(&itens);
                self.horarios = itens;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar horários");
                self.estado = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    pub fn exibidos(&self) -> &[Horario] {
        &self.horarios
    }

    /// Salva o horário novo e o insere na lista local como disponível.
    /// O id definitivo vem do backend no próximo refresh; até lá o item
    /// otimista usa id 0.
    pub async fn adicionar(&mut self, horario: NaiveDateTime) -> Result<(), AppError> {
        self.service
            .criar_horarios(self.loja_id, self.servico_id, vec![horario])
            .await?;
        self.aplicar_insercao(horario);
        Ok(())
    }

    fn aplicar_insercao(&mut self, horario: NaiveDateTime) {
        self.horarios.push(Horario {
            id: 0,
            horario,
            is_disponivel: true,
        });
        self.estado = EstadoTela::de_lista(&self.horarios);
    }

    pub fn estado(&self) -> &EstadoTela {
        &self.estado
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tela() -> HorariosTela {
        let service = crate::config::testes::estado_simulado().servico_service;
        HorariosTela::nova(service, 1, 2)
    }

    fn meio_dia() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn insercao_otimista_adiciona_como_disponivel() {
        let mut tela = tela();
        tela.aplicar_resultado(Ok(vec![]));
        assert_eq!(*tela.estado(), EstadoTela::Vazia);

        tela.aplicar_insercao(meio_dia());
        assert_eq!(tela.exibidos().len(), 1);
        assert!(tela.exibidos()[0].is_disponivel);
        assert_eq!(*tela.estado(), EstadoTela::Pronta);
    }

    #[tokio::test]
    async fn adicionar_em_modo_simulado_insere_na_lista() {
        let mut tela = tela();
        tela.carregar().await;
        let antes = tela.exibidos().len();

        tela.adicionar(meio_dia()).await.unwrap();
        assert_eq!(tela.exibidos().len(), antes + 1);
    }
}
