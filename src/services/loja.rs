// src/services/loja.rs

use reqwest::Method;
use reqwest::multipart::Form;
use validator::Validate;

use crate::common::error::AppError;
use crate::http::{ApiClient, desserializar_lista};
use crate::models::RespostaMensagem;
use crate::models::loja::{AtualizarPerfilPayload, DetalhesLoja, Loja, LojaProxima};
use crate::services::anexar_imagem;

#[derive(Clone)]
pub struct LojaService {
    api: ApiClient,
}

impl LojaService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn perfil(&self, loja_id: i64) -> Result<Loja, AppError> {
        let valor = self
            .api
            .requisitar(Method::GET, &format!("/loja/{loja_id}"), None)
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar perfil da loja"))?;
        Ok(serde_json::from_value(valor)?)
    }

    /// Atualização de perfil via multipart: nome sempre vai; descrição,
    /// geolocalização e foto só quando informados. Foto que já é URL
    /// remota não é reenviada.
    pub async fn atualizar_perfil(
        &self,
        loja_id: i64,
        payload: AtualizarPerfilPayload,
    ) -> Result<RespostaMensagem, AppError> {
        payload.validate()?;

        let mut form = Form::new().text("nome_loja", payload.nome_loja.clone());
        if let Some(descricao) = &payload.descricao {
            form = form.text("descricao", descricao.clone());
        }
        if let Some(latitude) = payload.latitude {
            form = form.text("latitude", latitude.to_string());
        }
        if let Some(longitude) = payload.longitude {
            form = form.text("longitude", longitude.to_string());
        }
        if let Some(imagem) = &payload.imagem {
            let remota = imagem.to_str().is_some_and(|c| c.starts_with("http"));
            if !remota {
                form = anexar_imagem(form, imagem, "arquivo").await?;
            }
        }

        let valor = self
            .api
            .requisitar_multipart(
                Method::PUT,
                &format!("/loja/{loja_id}/atualizar_perfil"),
                form,
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao atualizar perfil"))?;
        Ok(serde_json::from_value(valor)?)
    }

    /// Busca de lojas próximas; a API devolve a lista já ordenada por
    /// distância.
    pub async fn lojas_proximas(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<LojaProxima>, AppError> {
        let valor = self
            .api
            .requisitar(
                Method::GET,
                &format!("/lojas-proximas?lat={latitude}&lng={longitude}"),
                None,
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar lojas próximas"))?;
        desserializar_lista(valor, "lojas")
    }

    /// Tela de detalhes da loja vista pelo cliente: perfil, produtos e
    /// serviços em três chamadas sequenciais.
    pub async fn detalhes(&self, loja_id: i64) -> Result<DetalhesLoja, AppError> {
        let loja = self.perfil(loja_id).await?;

        let produtos = self
            .api
            .requisitar(Method::GET, &format!("/loja/{loja_id}/produtos"), None)
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar produtos"))?;
        let servicos = self
            .api
            .requisitar(Method::GET, &format!("/loja/{loja_id}/servicos"), None)
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar serviços"))?;

        Ok(DetalhesLoja {
            loja,
            produtos: desserializar_lista(produtos, "produtos")?,
            servicos: desserializar_lista(servicos, "servicos")?,
        })
    }
}
