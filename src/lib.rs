// src/lib.rs

//! Núcleo do aplicativo Cyclism: conecta ciclistas a lojas de
//! bicicleta. Este crate cobre tudo abaixo da camada de apresentação —
//! sessão local de identidade, cliente HTTP com transporte simulado de
//! demonstração, funções de domínio da API REST e os view-models das
//! telas.

pub mod common;
pub mod config;
pub mod http;
pub mod models;
pub mod services;
pub mod sessao;
pub mod telas;

pub use common::error::AppError;
pub use config::{AppConfig, AppState};
