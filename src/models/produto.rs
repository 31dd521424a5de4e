// src/models/produto.rs

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validar_nao_negativo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produto {
    pub id: i64,
    pub nome_produto: String,
    pub preco: Decimal,
    pub quantidade_estoque: u32,
    #[serde(default)]
    pub image_path: Option<String>,
}

// Dados do formulário de cadastro de produto. O envio é multipart por
// causa da imagem; ver ProdutoService::cadastrar_com_imagem.
#[derive(Debug, Validate)]
pub struct CadastroProdutoPayload {
    #[validate(length(min = 1, message = "O nome do produto é obrigatório."))]
    pub nome_produto: String,

    #[validate(custom(function = validar_nao_negativo))]
    pub preco: Decimal,

    pub quantidade_estoque: u32,

    /// Caminho local da imagem escolhida na galeria.
    pub imagem: Option<PathBuf>,
}
