use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A taxonomia segue o que as telas precisam distinguir: falha de
// transporte (sem resposta), falha do servidor (resposta não-2xx com
// corpo) e falha de validação (barrada antes de qualquer requisição).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Nenhuma resposta chegou do servidor (rede fora, DNS, timeout).
    #[error("Erro de conexão com o servidor")]
    FalhaTransporte(#[source] reqwest::Error),

    // O servidor respondeu com status de erro; `detalhe` carrega o campo
    // `detail` do corpo, ou o fallback da operação.
    #[error("{detalhe}")]
    FalhaServidor { status: u16, detalhe: String },

    // O corpo veio num formato que o contrato não prevê. Falha alto em
    // vez de fingir que a lista veio vazia.
    #[error("Resposta inesperada do servidor: {0}")]
    RespostaInvalida(String),

    #[error("Resposta em formato inesperado")]
    JsonError(#[from] serde_json::Error),

    #[error("URL inválida")]
    UrlError(#[from] url::ParseError),

    #[error("Nenhum usuário logado")]
    SessaoAusente,

    #[error("Erro ao acessar o armazenamento local")]
    ArmazenamentoError(#[from] std::io::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do aplicativo")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Substitui um detalhe vazio do servidor pela mensagem padrão da
    /// operação, preservando qualquer detalhe que o backend mandou.
    pub fn com_fallback(self, padrao: &str) -> AppError {
        match self {
            AppError::FalhaServidor { status, detalhe } if detalhe.is_empty() => {
                AppError::FalhaServidor {
                    status,
                    detalhe: padrao.to_string(),
                }
            }
            outro => outro,
        }
    }

    pub fn eh_transporte(&self) -> bool {
        matches!(self, AppError::FalhaTransporte(_))
    }
}

// Classificação do erro do reqwest: se não há status, nenhuma resposta
// chegou — é falha de transporte. Com status, o fluxo normal trata o
// corpo antes e monta `FalhaServidor` manualmente.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::FalhaServidor {
                status: status.as_u16(),
                detalhe: String::new(),
            },
            None => AppError::FalhaTransporte(err),
        }
    }
}
