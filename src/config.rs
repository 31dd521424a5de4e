// src/config.rs

use std::path::PathBuf;
use std::time::Duration;
use std::{env, str::FromStr};

use crate::http::ApiClient;
use crate::http::transporte::ModoTransporte;
use crate::services::agendamento::AgendamentoService;
use crate::services::auth::AuthService;
use crate::services::loja::LojaService;
use crate::services::produto::ProdutoService;
use crate::services::servico::ServicoService;
use crate::sessao::SessaoStore;

/// URL do backend. Pode ser sobrescrita por CYCLISM_BASE_URL.
pub const BASE_URL_PADRAO: &str =
    "https://5000-idx-bikestoreapi-1744211447227.cluster-uf6urqn4lned4spwk4xorq6bpo.cloudworkstations.dev";

/// Timeout único para todas as chamadas; não há ajuste por operação.
pub const TIMEOUT_PADRAO: Duration = Duration::from_secs(10);

const ARQUIVO_SESSAO_PADRAO: &str = "cyclism-sessao.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub modo_transporte: ModoTransporte,
    pub caminho_sessao: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("CYCLISM_BASE_URL").unwrap_or_else(|_| BASE_URL_PADRAO.to_string());
        let modo_transporte = env::var("CYCLISM_TRANSPORTE")
            .ok()
            .and_then(|valor| {
                ModoTransporte::from_str(&valor)
                    .inspect_err(|erro| tracing::warn!(%erro, "usando o modo de transporte padrão"))
                    .ok()
            })
            .unwrap_or_default();
        let caminho_sessao = env::var("CYCLISM_SESSAO")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(ARQUIVO_SESSAO_PADRAO));

        Self {
            base_url,
            timeout: TIMEOUT_PADRAO,
            modo_transporte,
            caminho_sessao,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL_PADRAO.to_string(),
            timeout: TIMEOUT_PADRAO,
            modo_transporte: ModoTransporte::default(),
            caminho_sessao: PathBuf::from(ARQUIVO_SESSAO_PADRAO),
        }
    }
}

/// Estado da aplicação: sessão, cliente HTTP e serviços já conectados.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub sessao: SessaoStore,
    pub auth_service: AuthService,
    pub loja_service: LojaService,
    pub produto_service: ProdutoService,
    pub servico_service: ServicoService,
    pub agendamento_service: AgendamentoService,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        // --- Monta o gráfico de dependências ---
        let sessao = SessaoStore::abrir(&config.caminho_sessao)?;
        let api = ApiClient::novo(&config, sessao.clone())?;

        let auth_service = AuthService::new(api.clone(), sessao.clone());
        let loja_service = LojaService::new(api.clone());
        let produto_service = ProdutoService::new(api.clone());
        let servico_service = ServicoService::new(api.clone());
        let agendamento_service = AgendamentoService::new(api);

        tracing::info!(
            modo = ?config.modo_transporte,
            "✅ Estado da aplicação montado"
        );

        Ok(Self {
            config,
            sessao,
            auth_service,
            loja_service,
            produto_service,
            servico_service,
            agendamento_service,
        })
    }
}

/// Inicializa o logger; chamar uma vez no boot do aplicativo.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_target(false).compact().init();
}

#[cfg(test)]
pub mod testes {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static CONTADOR: AtomicU64 = AtomicU64::new(0);

    /// AppState de teste: transporte simulado e sessão em arquivo
    /// temporário exclusivo.
    pub fn estado_simulado() -> AppState {
        let n = CONTADOR.fetch_add(1, Ordering::Relaxed);
        let caminho = std::env::temp_dir().join(format!(
            "cyclism-teste-{}-{n}.json",
            std::process::id()
        ));
        let config = AppConfig {
            base_url: "http://localhost:9".to_string(),
            timeout: Duration::from_secs(1),
            modo_transporte: ModoTransporte::Simulado,
            caminho_sessao: caminho,
        };
        AppState::new(config).expect("estado de teste")
    }
}
