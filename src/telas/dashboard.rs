// src/telas/dashboard.rs

use crate::models::agendamento::Agendamento;
use crate::models::loja::LojaProxima;
use crate::services::agendamento::AgendamentoService;
use crate::services::auth::AuthService;
use crate::services::loja::LojaService;
use crate::telas::EstadoTela;

/// Tela inicial do cliente. As lojas próximas não dependem de login;
/// nome e agenda só carregam quando o id do cliente aparece (a leitura
/// da sessão termina depois do primeiro render).
pub struct DashboardClienteTela {
    auth: AuthService,
    lojas: LojaService,
    agenda: AgendamentoService,

    cliente_id: Option<i64>,
    pub nome: String,
    lojas_proximas: Vec<LojaProxima>,
    agendamentos: Vec<Agendamento>,
    estado_lojas: EstadoTela,
    estado_agenda: EstadoTela,
}

impl DashboardClienteTela {
    pub fn nova(auth: AuthService, lojas: LojaService, agenda: AgendamentoService) -> Self {
        Self {
            auth,
            lojas,
            agenda,
            cliente_id: None,
            nome: String::new(),
            lojas_proximas: Vec::new(),
            agendamentos: Vec::new(),
            estado_lojas: EstadoTela::default(),
            estado_agenda: EstadoTela::default(),
        }
    }

    pub fn definir_cliente(&mut self, cliente_id: i64) {
        self.cliente_id = Some(cliente_id);
    }

    pub async fn carregar_lojas_proximas(&mut self, latitude: f64, longitude: f64) {
        self.estado_lojas = EstadoTela::Carregando;
        match self.lojas.lojas_proximas(latitude, longitude).await {
            Ok(lojas) => {
                self.estado_lojas = EstadoTela::de_lista(&lojas);
                self.lojas_proximas = lojas;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar lojas próximas");
                self.estado_lojas = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    /// Buscas que dependem do id: nome do cliente e agenda. Sem id, não
    /// faz nada; o chamador repete quando a sessão resolver.
    pub async fn carregar_dependentes(&mut self) {
        let Some(id) = self.cliente_id else {
            return;
        };

        match self.auth.cliente_atual(id).await {
            Ok(cliente) => self.nome = cliente.nome,
            Err(erro) => tracing::error!(%erro, "erro ao buscar cliente"),
        }

        self.estado_agenda = EstadoTela::Carregando;
        match self.agenda.agenda_do_cliente(id).await {
            Ok(itens) => {
                self.estado_agenda = EstadoTela::de_lista(&itens);
                self.agendamentos = itens;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar agendamentos");
                self.estado_agenda = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    pub fn lojas_proximas(&self) -> &[LojaProxima] {
        &self.lojas_proximas
    }

    pub fn agendamentos(&self) -> &[Agendamento] {
        &self.agendamentos
    }

    pub fn estado_lojas(&self) -> &EstadoTela {
        &self.estado_lojas
    }

    pub fn estado_agenda(&self) -> &EstadoTela {
        &self.estado_agenda
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tela() -> DashboardClienteTela {
        let estado = crate::config::testes::estado_simulado();
        DashboardClienteTela::nova(
            estado.auth_service,
            estado.loja_service,
            estado.agendamento_service,
        )
    }

    #[tokio::test]
    async fn sem_id_as_buscas_dependentes_nao_rodam() {
        let mut tela = tela();
        tela.carregar_dependentes().await;
        assert_eq!(*tela.estado_agenda(), EstadoTela::NaoIniciada);
        assert!(tela.nome.is_empty());
    }
}
