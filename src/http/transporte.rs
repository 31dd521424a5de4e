// src/http/transporte.rs
//
// Costura de transporte do cliente HTTP. A estratégia é escolhida por
// configuração: rede de verdade, rede com reserva simulada para demo,
// ou só simulação (sem backend nenhum).

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde_json::Value;

use crate::common::error::AppError;

/// Modo de transporte do aplicativo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModoTransporte {
    /// Só rede; falha de transporte chega à tela como erro de conexão.
    #[default]
    Real,
    /// Rede; se a falha for de transporte (sem resposta), cai na
    /// resposta simulada. Erros reportados pelo servidor nunca caem.
    RealComSimulacao,
    /// Nunca toca a rede. Modo de demonstração.
    Simulado,
}

impl std::str::FromStr for ModoTransporte {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor.to_ascii_lowercase().as_str() {
            "real" => Ok(ModoTransporte::Real),
            "real_com_simulacao" => Ok(ModoTransporte::RealComSimulacao),
            "simulado" => Ok(ModoTransporte::Simulado),
            outro => Err(format!("modo de transporte desconhecido: {outro}")),
        }
    }
}

/// Corpo de uma requisição ao backend.
pub enum Corpo {
    Vazio,
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

pub struct Requisicao {
    pub metodo: Method,
    pub caminho: String,
    pub corpo: Corpo,
}

/// Um jeito de executar requisições. O cliente HTTP fala só com essa
/// trait; a simulação entra como outra implementação, nunca por
/// inspeção de mensagem de erro.
#[async_trait]
pub trait Transporte: Send + Sync {
    async fn executar(&self, requisicao: Requisicao) -> Result<Value, AppError>;
}

/// Transporte de rede real via reqwest.
pub struct TransporteReal {
    client: Client,
    base: Url,
}

impl TransporteReal {
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }
}

#[async_trait]
impl Transporte for TransporteReal {
    async fn executar(&self, requisicao: Requisicao) -> Result<Value, AppError> {
        let url = self.base.join(requisicao.caminho.trim_start_matches('/'))?;

        let mut builder = self.client.request(requisicao.metodo, url);
        builder = match requisicao.corpo {
            Corpo::Vazio => builder,
            Corpo::Json(valor) => builder.json(&valor),
            Corpo::Multipart(form) => builder.multipart(form),
        };

        let resposta = builder.send().await.map_err(AppError::from)?;
        let status = resposta.status();
        let bytes = resposta.bytes().await.map_err(AppError::from)?;

        if !status.is_success() {
            // Erro reportado pelo servidor: a mensagem é o campo
            // `detail` do corpo, quando ele existe.
            let detalhe = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|corpo| {
                    corpo
                        .get("detail")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_default();
            return Err(AppError::FalhaServidor {
                status: status.as_u16(),
                detalhe,
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::RespostaInvalida(format!("corpo não é JSON: {e}")))
    }
}
