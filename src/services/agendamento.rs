// src/services/agendamento.rs

use reqwest::Method;

use crate::common::error::AppError;
use crate::http::{ApiClient, desserializar_lista};
use crate::models::RespostaMensagem;
use crate::models::agendamento::{AgendaItemWire, Agendamento};

#[derive(Clone)]
pub struct AgendamentoService {
    api: ApiClient,
}

impl AgendamentoService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Agenda do cliente. As linhas cruas trazem o timestamp inteiro em
    /// `data_horario`; aqui ele vira data + hora de exibição.
    pub async fn agenda_do_cliente(&self, cliente_id: i64) -> Result<Vec<Agendamento>, AppError> {
        let valor = self
            .api
            .requisitar(Method::GET, &format!("/cliente/{cliente_id}/agenda"), None)
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar agendamentos"))?;
        let itens: Vec<AgendaItemWire> = desserializar_lista(valor, "agenda_cliente")?;
        Ok(itens.into_iter().map(Agendamento::from).collect())
    }

    /// Cancela uma reserva. Transição única e sem volta; o chamador só
    /// deve oferecer a ação para status não terminais.
    pub async fn cancelar(&self, reserva_id: i64) -> Result<RespostaMensagem, AppError> {
        let valor = self
            .api
            .requisitar(Method::PUT, &format!("/reserva/{reserva_id}/cancelar"), None)
            .await
            .map_err(|e| e.com_fallback("Erro ao cancelar agendamento"))?;
        Ok(serde_json::from_value(valor)?)
    }
}
