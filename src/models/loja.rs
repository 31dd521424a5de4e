// src/models/loja.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::produto::Produto;
use super::servico::Servico;

// Perfil da loja como vem do backend. O GET de perfil não devolve o id
// no corpo (ele já está na URL), então o campo é opcional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loja {
    #[serde(default)]
    pub id: Option<i64>,
    pub nome_loja: String,
    pub cnpj: String,
    pub cep: String,
    pub endereco: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub foto_path: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

// Item da busca de lojas próximas. `distancia` já vem formatada pela
// API ("1,2 km") e a lista chega ordenada por proximidade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LojaProxima {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub endereco: String,
    pub distancia: String,
    pub avaliacao: f64,
    #[serde(default)]
    pub imagem: Option<String>,
}

// Dados da tela de atualização de perfil. Vira formulário multipart:
// os escalares como campos de texto e a imagem como campo binário.
#[derive(Debug, Validate)]
pub struct AtualizarPerfilPayload {
    #[validate(length(min = 1, message = "O nome da loja é obrigatório."))]
    pub nome_loja: String,
    pub descricao: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Caminho local da nova foto; `None` mantém a atual.
    pub imagem: Option<PathBuf>,
}

/// Agregado da tela de detalhes da loja vista pelo cliente.
#[derive(Debug, Clone)]
pub struct DetalhesLoja {
    pub loja: Loja,
    pub produtos: Vec<Produto>,
    pub servicos: Vec<Servico>,
}
