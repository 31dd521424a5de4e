// src/services/servico.rs

use chrono::NaiveDateTime;
use reqwest::Method;
use serde_json::json;
use validator::Validate;

use crate::common::error::AppError;
use crate::http::{ApiClient, desserializar_lista};
use crate::models::RespostaMensagem;
use crate::models::servico::{CadastroServicoPayload, Horario, Servico};

#[derive(Clone)]
pub struct ServicoService {
    api: ApiClient,
}

impl ServicoService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self, loja_id: i64) -> Result<Vec<Servico>, AppError> {
        let valor = self
            .api
            .requisitar(Method::GET, &format!("/loja/{loja_id}/servicos"), None)
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar serviços"))?;
        desserializar_lista(valor, "servicos")
    }

    pub async fn cadastrar(
        &self,
        loja_id: i64,
        payload: CadastroServicoPayload,
    ) -> Result<RespostaMensagem, AppError> {
        payload.validate()?;
        let valor = self
            .api
            .requisitar(
                Method::POST,
                &format!("/loja/{loja_id}/servico"),
                Some(serde_json::to_value(&payload)?),
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao cadastrar serviço"))?;
        Ok(serde_json::from_value(valor)?)
    }

    pub async fn remover(
        &self,
        loja_id: i64,
        servico_id: i64,
    ) -> Result<RespostaMensagem, AppError> {
        let valor = self
            .api
            .requisitar(
                Method::DELETE,
                &format!("/loja/{loja_id}/servico/{servico_id}"),
                None,
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao remover serviço"))?;
        Ok(serde_json::from_value(valor)?)
    }

    pub async fn listar_horarios(
        &self,
        loja_id: i64,
        servico_id: i64,
    ) -> Result<Vec<Horario>, AppError> {
        let valor = self
            .api
            .requisitar(
                Method::GET,
                &format!("/loja/{loja_id}/servico/{servico_id}/horarios"),
                None,
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar horários"))?;
        desserializar_lista(valor, "horarios_servico")
    }

    pub async fn criar_horarios(
        &self,
        loja_id: i64,
        servico_id: i64,
        horarios: Vec<NaiveDateTime>,
    ) -> Result<RespostaMensagem, AppError> {
        let valor = self
            .api
            .requisitar(
                Method::POST,
                &format!("/loja/{loja_id}/servico/{servico_id}/horarios"),
                Some(json!({ "horarios": horarios })),
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao criar horários"))?;
        Ok(serde_json::from_value(valor)?)
    }
}
