// src/models/cliente.rs

use serde::{Deserialize, Serialize};

// Representa o cliente (ciclista) vindo do backend. O endpoint
// /clientes/me devolve só o nome, então os demais campos têm default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(default)]
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub idade: u8,
}
