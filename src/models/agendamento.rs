// src/models/agendamento.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// Status de uma reserva. O backend usa "aceito" e "confirmado" como
// sinônimos no mesmo campo; aqui os dois caem na mesma variante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusAgendamento {
    #[serde(alias = "PENDENTE")]
    Pendente,
    #[serde(alias = "aceito", alias = "ACEITO", alias = "CONFIRMADO")]
    Confirmado,
    #[serde(alias = "CONCLUIDO")]
    Concluido,
    #[serde(alias = "CANCELADO")]
    Cancelado,
}

impl StatusAgendamento {
    /// Cor do selo de status na lista de agendamentos.
    pub fn cor(&self) -> &'static str {
        match self {
            StatusAgendamento::Confirmado => "#4CAF50",
            StatusAgendamento::Pendente => "#FF9800",
            StatusAgendamento::Concluido => "#2196F3",
            StatusAgendamento::Cancelado => "#F44336",
        }
    }

    pub fn rotulo(&self) -> &'static str {
        match self {
            StatusAgendamento::Confirmado => "Confirmado",
            StatusAgendamento::Pendente => "Pendente",
            StatusAgendamento::Concluido => "Concluído",
            StatusAgendamento::Cancelado => "Cancelado",
        }
    }

    /// Estados terminais não podem mais ser alterados pelo cliente.
    pub fn eh_terminal(&self) -> bool {
        matches!(
            self,
            StatusAgendamento::Concluido | StatusAgendamento::Cancelado
        )
    }

    /// Qualquer status não terminal pode ser cancelado, em um único
    /// passo (não há "descancelar").
    pub fn pode_cancelar(&self) -> bool {
        !self.eh_terminal()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agendamento {
    pub id: i64,
    pub loja: String,
    pub servico: String,
    pub data: NaiveDate,
    /// Hora no formato HH:MM, pronta para exibição.
    pub hora: String,
    pub status: StatusAgendamento,
}

// Linha crua da agenda como o backend manda em
// GET /cliente/{id}/agenda.
#[derive(Debug, Deserialize)]
pub struct AgendaItemWire {
    pub reserva_id: i64,
    pub loja_id: i64,
    pub servico_id: i64,
    pub data_horario: NaiveDateTime,
    pub status: StatusAgendamento,
}

impl From<AgendaItemWire> for Agendamento {
    fn from(item: AgendaItemWire) -> Self {
        Agendamento {
            id: item.reserva_id,
            loja: item.loja_id.to_string(),
            servico: item.servico_id.to_string(),
            data: item.data_horario.date(),
            hora: item.data_horario.format("%H:%M").to_string(),
            status: item.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceito_e_confirmado_caem_na_mesma_variante() {
        for bruto in ["\"confirmado\"", "\"aceito\"", "\"ACEITO\""] {
            let status: StatusAgendamento = serde_json::from_str(bruto).unwrap();
            assert_eq!(status, StatusAgendamento::Confirmado);
        }
        assert_eq!(
            serde_json::to_string(&StatusAgendamento::Confirmado).unwrap(),
            "\"confirmado\""
        );
    }

    #[test]
    fn terminais_nao_podem_ser_cancelados() {
        assert!(StatusAgendamento::Pendente.pode_cancelar());
        assert!(StatusAgendamento::Confirmado.pode_cancelar());
        assert!(!StatusAgendamento::Concluido.pode_cancelar());
        assert!(!StatusAgendamento::Cancelado.pode_cancelar());
    }

    #[test]
    fn linha_da_agenda_vira_agendamento() {
        let bruto = serde_json::json!({
            "reserva_id": 9,
            "loja_id": 2,
            "servico_id": 5,
            "data_horario": "2025-05-15T14:30:00",
            "status": "pendente"
        });
        let item: AgendaItemWire = serde_json::from_value(bruto).unwrap();
        let agendamento = Agendamento::from(item);
        assert_eq!(agendamento.id, 9);
        assert_eq!(agendamento.data.to_string(), "2025-05-15");
        assert_eq!(agendamento.hora, "14:30");
        assert_eq!(agendamento.status, StatusAgendamento::Pendente);
    }

    #[test]
    fn cada_status_tem_cor_e_rotulo_proprios() {
        let todos = [
            StatusAgendamento::Pendente,
            StatusAgendamento::Confirmado,
            StatusAgendamento::Concluido,
            StatusAgendamento::Cancelado,
        ];
        for status in todos {
            assert!(status.cor().starts_with('#'));
            assert!(!status.rotulo().is_empty());
        }
    }
}
