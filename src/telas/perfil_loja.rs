// src/telas/perfil_loja.rs

use crate::common::error::AppError;
use crate::models::RespostaMensagem;
use crate::models::loja::{AtualizarPerfilPayload, Loja};
use crate::services::loja::LojaService;
use crate::telas::EstadoTela;

/// Tela de perfil da loja: um único registro, então o ciclo é só
/// Carregando → Pronta | Falha (não existe "Vazia" aqui).
pub struct PerfilLojaTela {
    service: LojaService,
    loja_id: Option<i64>,
    estado: EstadoTela,
    loja: Option<Loja>,
}

impl PerfilLojaTela {
    pub fn nova(service: LojaService) -> Self {
        Self {
            service,
            loja_id: None,
            estado: EstadoTela::default(),
            loja: None,
        }
    }

    pub fn definir_loja(&mut self, loja_id: i64) {
        self.loja_id = Some(loja_id);
    }

    pub async fn carregar(&mut self) {
        let Some(id) = self.loja_id else {
            return;
        };
        self.estado = EstadoTela::Carregando;
        match self.service.perfil(id).await {
            Ok(loja) => {
                self.loja = Some(loja);
                self.estado = EstadoTela::Pronta;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar perfil da loja");
                self.estado = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    pub fn loja(&self) -> Option<&Loja> {
        self.loja.as_ref()
    }

    /// Atualiza o perfil e aplica os campos novos no registro local.
    pub async fn atualizar(
        &mut self,
        payload: AtualizarPerfilPayload,
    ) -> Result<RespostaMensagem, AppError> {
        let loja_id = self.loja_id.ok_or(AppError::SessaoAusente)?;
        let resposta = self
            .service
            .atualizar_perfil(
                loja_id,
                AtualizarPerfilPayload {
                    nome_loja: payload.nome_loja.clone(),
                    descricao: payload.descricao.clone(),
                    latitude: payload.latitude,
                    longitude: payload.longitude,
                    imagem: payload.imagem.clone(),
                },
            )
            .await?;

        if let Some(loja) = &mut self.loja {
            loja.nome_loja = payload.nome_loja;
            if payload.descricao.is_some() {
                loja.descricao = payload.descricao;
            }
            if payload.latitude.is_some() {
                loja.latitude = payload.latitude;
            }
            if payload.longitude.is_some() {
                loja.longitude = payload.longitude;
            }
        }
        Ok(resposta)
    }

    pub fn estado(&self) -> &EstadoTela {
        &self.estado
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn carregar_em_modo_simulado_preenche_o_perfil() {
        let service = crate::config::testes::estado_simulado().loja_service;
        let mut tela = PerfilLojaTela::nova(service);
        tela.definir_loja(7);
        tela.carregar().await;

        assert_eq!(*tela.estado(), EstadoTela::Pronta);
        assert_eq!(tela.loja().unwrap().nome_loja, "Minha Loja de Bikes");
    }

    #[tokio::test]
    async fn sem_loja_definida_nao_carrega() {
        let service = crate::config::testes::estado_simulado().loja_service;
        let mut tela = PerfilLojaTela::nova(service);
        tela.carregar().await;
        assert_eq!(*tela.estado(), EstadoTela::NaoIniciada);
    }
}
