// src/telas/buscar.rs

use std::cmp::Ordering;

use crate::common::error::AppError;
use crate::models::loja::LojaProxima;
use crate::services::loja::LojaService;
use crate::telas::EstadoTela;

/// Ordenação da lista de exibição. A API já devolve por proximidade,
/// então "Mais Próximas" é a ordem de chegada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordenacao {
    #[default]
    MaisProximas,
    MelhorAvaliadas,
}

/// Tela "Buscar Lojas": busca por texto livre e ordenação, ambas
/// aplicadas em memória sobre o último resultado.
pub struct BuscarLojasTela {
    service: LojaService,
    estado: EstadoTela,
    brutas: Vec<LojaProxima>,
    busca: String,
    ordenacao: Ordenacao,
}

impl BuscarLojasTela {
    pub fn nova(service: LojaService) -> Self {
        Self {
            service,
            estado: EstadoTela::default(),
            brutas: Vec::new(),
            busca: String::new(),
            ordenacao: Ordenacao::default(),
        }
    }

    pub async fn carregar(&mut self, latitude: f64, longitude: f64) {
        self.estado = EstadoTela::Carregando;
        let resultado = self.service.lojas_proximas(latitude, longitude).await;
        self.aplicar_resultado(resultado);
    }

    fn aplicar_resultado(&mut self, resultado: Result<Vec<LojaProxima>, AppError>) {
        match resultado {
            Ok(lojas) => {
                self.estado = EstadoTela::de_lista(&lojas);
                self.brutas = lojas;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar lojas próximas");
                self.estado = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    pub fn definir_busca(&mut self, termo: impl Into<String>) {
        self.busca = termo.into();
    }

    pub fn definir_ordenacao(&mut self, ordenacao: Ordenacao) {
        self.ordenacao = ordenacao;
    }

    /// Lista derivada: filtro por substring (sem diferenciar
    /// maiúsculas) no nome ou endereço, depois a ordenação ativa.
    pub fn exibidas(&self) -> Vec<&LojaProxima> {
        let termo = self.busca.to_lowercase();
        let mut lojas: Vec<&LojaProxima> = self
            .brutas
            .iter()
            .filter(|loja| {
                termo.is_empty()
                    || loja.nome.to_lowercase().contains(&termo)
                    || loja.endereco.to_lowercase().contains(&termo)
            })
            .collect();

        if self.ordenacao == Ordenacao::MelhorAvaliadas {
            lojas.sort_by(|a, b| {
                b.avaliacao
                    .partial_cmp(&a.avaliacao)
                    .unwrap_or(Ordering::Equal)
            });
        }
        lojas
    }

    pub fn estado(&self) -> &EstadoTela {
        &self.estado
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loja(id: i64, nome: &str, endereco: &str, avaliacao: f64) -> LojaProxima {
        LojaProxima {
            id,
            nome: nome.into(),
            endereco: endereco.into(),
            distancia: "1,2 km".into(),
            avaliacao,
            imagem: None,
        }
    }

    fn tela_com_lojas() -> BuscarLojasTela {
        let service = crate::config::testes::estado_simulado().loja_service;
        let mut tela = BuscarLojasTela::nova(service);
        tela.aplicar_resultado(Ok(vec![
            loja(1, "Bike Shop", "Av. das Bicicletas, 123", 4.5),
            loja(2, "Ciclo Peças", "Rua dos Pedais, 45", 3.8),
            loja(3, "Bicicletas & Cia", "Av. Central, 900", 4.9),
        ]));
        tela
    }

    #[test]
    fn busca_por_substring_do_nome_sem_diferenciar_caixa() {
        let mut tela = tela_com_lojas();
        tela.definir_busca("bike");
        let exibidas = tela.exibidas();
        assert_eq!(exibidas.len(), 1);
        assert_eq!(exibidas[0].id, 1);
    }

    #[test]
    fn busca_tambem_casa_com_o_endereco() {
        let mut tela = tela_com_lojas();
        tela.definir_busca("pedais");
        let exibidas = tela.exibidas();
        assert_eq!(exibidas.len(), 1);
        assert_eq!(exibidas[0].id, 2);
    }

    #[test]
    fn busca_vazia_exibe_tudo_na_ordem_da_api() {
        let tela = tela_com_lojas();
        let ids: Vec<i64> = tela.exibidas().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn melhor_avaliadas_ordena_por_avaliacao_nao_crescente() {
        let mut tela = tela_com_lojas();
        tela.definir_ordenacao(Ordenacao::MelhorAvaliadas);

        let exibidas = tela.exibidas();
        for par in exibidas.windows(2) {
            assert!(par[0].avaliacao >= par[1].avaliacao);
        }
        assert_eq!(exibidas[0].id, 3);
    }

    #[test]
    fn trocar_ordenacao_nao_mexe_no_resultado_cru() {
        let mut tela = tela_com_lojas();
        tela.definir_ordenacao(Ordenacao::MelhorAvaliadas);
        let _ = tela.exibidas();
        let ids: Vec<i64> = tela.brutas.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
