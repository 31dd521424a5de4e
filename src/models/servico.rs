// src/models/servico.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validar_nao_negativo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Servico {
    pub id: i64,
    pub nome_servico: String,
    pub preco: Decimal,
    #[serde(default)]
    pub descricao: String,
}

// Horário de atendimento de um serviço. `horario` chega como timestamp
// ISO sem fuso ("2023-05-15T14:30:00").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Horario {
    pub id: i64,
    pub horario: NaiveDateTime,
    pub is_disponivel: bool,
}

#[derive(Debug, Serialize, Validate)]
pub struct CadastroServicoPayload {
    #[validate(length(min = 1, message = "O nome do serviço é obrigatório."))]
    pub nome_servico: String,

    #[validate(custom(function = validar_nao_negativo))]
    pub preco: Decimal,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub descricao: String,
}
