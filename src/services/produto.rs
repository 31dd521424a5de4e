// src/services/produto.rs

use reqwest::Method;
use reqwest::multipart::Form;
use validator::Validate;

use crate::common::error::AppError;
use crate::http::{ApiClient, desserializar_lista};
use crate::models::RespostaMensagem;
use crate::models::produto::{CadastroProdutoPayload, Produto};
use crate::services::anexar_imagem;

#[derive(Clone)]
pub struct ProdutoService {
    api: ApiClient,
}

impl ProdutoService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self, loja_id: i64) -> Result<Vec<Produto>, AppError> {
        let valor = self
            .api
            .requisitar(Method::GET, &format!("/loja/{loja_id}/produtos"), None)
            .await
            .map_err(|e| e.com_fallback("Erro ao buscar produtos"))?;
        desserializar_lista(valor, "produtos")
    }

    /// Cadastro com imagem: os escalares vão como campos de texto e a
    /// imagem como o campo binário "arquivo".
    pub async fn cadastrar_com_imagem(
        &self,
        loja_id: i64,
        payload: CadastroProdutoPayload,
    ) -> Result<RespostaMensagem, AppError> {
        payload.validate()?;

        let mut form = Form::new()
            .text("nome_produto", payload.nome_produto.clone())
            .text("preco", payload.preco.to_string())
            .text("quantidade_estoque", payload.quantidade_estoque.to_string());
        if let Some(imagem) = &payload.imagem {
            form = anexar_imagem(form, imagem, "arquivo").await?;
        }

        let valor = self
            .api
            .requisitar_multipart(
                Method::POST,
                &format!("/loja/{loja_id}/produto_com_imagem"),
                form,
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao cadastrar produto"))?;
        Ok(serde_json::from_value(valor)?)
    }

    pub async fn remover(
        &self,
        loja_id: i64,
        produto_id: i64,
    ) -> Result<RespostaMensagem, AppError> {
        let valor = self
            .api
            .requisitar(
                Method::DELETE,
                &format!("/loja/{loja_id}/produto/{produto_id}"),
                None,
            )
            .await
            .map_err(|e| e.com_fallback("Erro ao remover produto"))?;
        Ok(serde_json::from_value(valor)?)
    }
}
