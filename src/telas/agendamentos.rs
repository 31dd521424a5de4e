// src/telas/agendamentos.rs

use crate::common::error::AppError;
use crate::models::agendamento::{Agendamento, StatusAgendamento};
use crate::services::agendamento::AgendamentoService;
use crate::telas::EstadoTela;

/// Tela "Meus Agendamentos" do cliente: lista com filtro por status e
/// cancelamento otimista.
pub struct AgendamentosTela {
    service: AgendamentoService,
    cliente_id: Option<i64>,
    estado: EstadoTela,
    brutos: Vec<Agendamento>,
    filtro: Option<StatusAgendamento>,
}

impl AgendamentosTela {
    pub fn nova(service: AgendamentoService) -> Self {
        Self {
            service,
            cliente_id: None,
            estado: EstadoTela::default(),
            brutos: Vec::new(),
            filtro: None,
        }
    }

    /// O id pode chegar depois do primeiro render (leitura assíncrona
    /// da sessão); o chamador dispara `carregar` quando ele aparecer.
    pub fn definir_cliente(&mut self, cliente_id: i64) {
        self.cliente_id = Some(cliente_id);
    }

    /// Busca no mount e no refresh manual. Sem id de escopo, não faz
    /// nada.
    pub async fn carregar(&mut self) {
        let Some(id) = self.cliente_id else {
            return;
        };
        self.estado = EstadoTela::Carregando;
        let resultado = self.service.agenda_do_cliente(id).await;
        self.aplicar_resultado(resultado);
    }

    fn aplicar_resultado(&mut self, resultado: Result<Vec<Agendamento>, AppError>) {
        match resultado {
            Ok(itens) => {
                self.estado = EstadoTela::de_lista(&itens);
                self.brutos = itens;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar agendamentos");
                self.estado = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    /// Troca de filtro nunca vai à rede; só muda a lista derivada.
    pub fn definir_filtro(&mut self, filtro: Option<StatusAgendamento>) {
        self.filtro = filtro;
    }

    /// Lista derivada de exibição: o subconjunto exato do filtro ativo,
    /// ou tudo quando não há filtro.
    pub fn exibidos(&self) -> Vec<&Agendamento> {
        self.brutos
            .iter()
            .filter(|item| self.filtro.is_none_or(|f| item.status == f))
            .collect()
    }

    pub fn pode_cancelar(&self, reserva_id: i64) -> bool {
        self.brutos
            .iter()
            .any(|item| item.id == reserva_id && item.status.pode_cancelar())
    }

    /// Cancela a reserva no backend e, no sucesso, vira o status do
    /// único item correspondente para Cancelado. Em caso de erro, o
    /// estado fica como estava.
    pub async fn cancelar(&mut self, reserva_id: i64) -> Result<(), AppError> {
        if !self.pode_cancelar(reserva_id) {
            return Err(AppError::RespostaInvalida(
                "agendamento não pode ser cancelado".to_string(),
            ));
        }
        self.service.cancelar(reserva_id).await?;
        self.aplicar_cancelamento(reserva_id);
        Ok(())
    }

    fn aplicar_cancelamento(&mut self, reserva_id: i64) {
        for item in &mut self.brutos {
            if item.id == reserva_id {
                item.status = StatusAgendamento::Cancelado;
            }
        }
    }

    pub fn estado(&self) -> &EstadoTela {
        &self.estado
    }
}
