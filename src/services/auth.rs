// src/services/auth.rs

use reqwest::Method;
use validator::Validate;

use crate::common::error::AppError;
use crate::http::ApiClient;
use crate::models::auth::{
    LoginClientePayload, LoginLojaPayload, RegistroClientePayload, RegistroLojaPayload,
    RespostaAuth,
};
use crate::models::cliente::Cliente;
use crate::sessao::{Ator, CHAVE_CLIENTE_ID, CHAVE_LOJA_ID, SessaoStore};

/// Registro e login dos dois tipos de ator. O login é o único ponto do
/// aplicativo que escreve o id na sessão; o logout é o único que
/// remove.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    sessao: SessaoStore,
}

impl AuthService {
    pub fn new(api: ApiClient, sessao: SessaoStore) -> Self {
        Self { api, sessao }
    }

    pub async fn registrar_cliente(
        &self,
        payload: RegistroClientePayload,
    ) -> Result<RespostaAuth, AppError> {
        payload.validate()?;
        let valor = self
            .api
            .requisitar(
                Method::POST,
                "/cliente/registro",
                Some(serde_json::to_value(&payload)?),
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao registrar cliente"))?;
        Ok(serde_json::from_value(valor)?)
    }

    pub async fn login_cliente(
        &self,
        payload: LoginClientePayload,
    ) -> Result<RespostaAuth, AppError> {
        payload.validate()?;
        let valor = self
            .api
            .requisitar(
                Method::POST,
                "/cliente/login",
                Some(serde_json::to_value(&payload)?),
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao fazer login"))?;
        let resposta: RespostaAuth = serde_json::from_value(valor)?;

        // Persiste o id retornado antes de devolver ao chamador
        if let Some(id) = resposta.cliente_id {
            self.sessao.definir(CHAVE_CLIENTE_ID, &id.to_string())?;
        }
        Ok(resposta)
    }

    pub async fn registrar_loja(
        &self,
        payload: RegistroLojaPayload,
    ) -> Result<RespostaAuth, AppError> {
        payload.validate()?;
        let valor = self
            .api
            .requisitar(
                Method::POST,
                "/loja/registro",
                Some(serde_json::to_value(&payload)?),
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao registrar loja"))?;
        Ok(serde_json::from_value(valor)?)
    }

    pub async fn login_loja(&self, payload: LoginLojaPayload) -> Result<RespostaAuth, AppError> {
        payload.validate()?;
        let valor = self
            .api
            .requisitar(
                Method::POST,
                "/loja/login",
                Some(serde_json::to_value(&payload)?),
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao fazer login"))?;
        let resposta: RespostaAuth = serde_json::from_value(valor)?;

        if let Some(id) = resposta.loja_id {
            self.sessao.definir(CHAVE_LOJA_ID, &id.to_string())?;
        }
        Ok(resposta)
    }

    /// Dados do cliente logado (a tela inicial só usa o nome).
    pub async fn cliente_atual(&self, cliente_id: i64) -> Result<Cliente, AppError> {
        let valor = self
            .api
            .requisitar(
                Method::GET,
                &format!("/clientes/me?cliente_id={cliente_id}"),
                None,
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar cliente"))?;
        Ok(serde_json::from_value(valor)?)
    }

    pub fn ator_atual(&self) -> Option<Ator> {
        self.sessao.ator_atual()
    }

    /// Remove as duas chaves de identidade; a sessão volta a "deslogado".
    pub fn logout(&self) -> Result<(), AppError> {
        self.sessao.remover(CHAVE_CLIENTE_ID)?;
        self.sessao.remover(CHAVE_LOJA_ID)?;
        Ok(())
    }
}
