// src/telas/produtos.rs

use crate::common::error::AppError;
use crate::models::RespostaMensagem;
use crate::models::produto::{CadastroProdutoPayload, Produto};
use crate::services::produto::ProdutoService;
use crate::telas::EstadoTela;

/// Tela de produtos da loja: listagem, cadastro e remoção confirmada
/// com remendo otimista na lista.
pub struct ProdutosTela {
    service: ProdutoService,
    loja_id: Option<i64>,
    estado: EstadoTela,
    produtos: Vec<Produto>,
}

impl ProdutosTela {
    pub fn nova(service: ProdutoService) -> Self {
        Self {
            service,
            loja_id: None,
            estado: EstadoTela::default(),
            produtos: Vec::new(),
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
        let resultado = self.service.listar(id).await;
        self.aplicar_resultado(resultado);
    }

    fn aplicar_resultado(&mut self, resultado: Result<Vec<Produto>, AppError>) {
        match resultado {
            Ok(itens) => {
                self.estado = EstadoTela::de_lista(&itens);
                self.produtos = itens;
            }
            Err(erro) => {
                tracing::error!(%erro, "erro ao buscar produtos");
                self.estado = EstadoTela::Falha(erro.to_string());
            }
        }
    }

    pub fn exibidos(&self) -> &[Produto] {
        &self.produtos
    }

    pub async fn cadastrar(
        &mut self,
        payload: CadastroProdutoPayload,
    ) -> Result<RespostaMensagem, AppError> {
        let loja_id = self.loja_id.ok_or(AppError::SessaoAusente)?;
        self.service.cadastrar_com_imagem(loja_id, payload).await
    }

    /// Remoção já confirmada pelo usuário: chama a API e, no sucesso,
    /// tira só o item removido da lista. Falha deixa tudo como estava.
    pub async fn remover(&mut self, produto_id: i64) -> Result<(), AppError> {
        let loja_id = self.loja_id.ok_or(AppError::SessaoAusente)?;
        self.service.remover(loja_id, produto_id).await?;
        self.aplicar_remocao(produto_id);
        Ok(())
    }

    fn aplicar_remocao(&mut self, produto_id: i64) {
        self.produtos.retain(|p| p.id != produto_id);
        self.estado = EstadoTela::de_lista(&self.produtos);
    }

    pub fn estado(&self) -> &EstadoTela {
        &self.estado
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn produto(id: i64, nome: &str) -> Produto {
        Produto {
            id,
            nome_produto: nome.into(),
            preco: Decimal::new(1999, 1),
            quantidade_estoque: 5,
            image_path: None,
        }
    }

    fn tela_com_produtos() -> ProdutosTela {
        let service = crate::config::testes::estado_simulado().produto_service;
        let mut tela = ProdutosTela::nova(service);
        tela.definir_loja(1);
        tela.aplicar_resultado(Ok(vec![
            produto(1, "Capacete MTB"),
            produto(2, "Luvas de Ciclismo"),
            produto(3, "Bomba de Ar"),
        ]));
        tela
    }

    #[test]
    fn remocao_tira_exatamente_o_item_removido() {
        let mut tela = tela_com_produtos();
        tela.aplicar_remocao(2);

        let ids: Vec<i64> = tela.exibidos().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remover_o_ultimo_item_leva_ao_estado_vazia() {
        let mut tela = tela_com_produtos();
        tela.aplicar_remocao(1);
        tela.aplicar_remocao(2);
        tela.aplicar_remocao(3);
        assert_eq!(*tela.estado(), EstadoTela::Vazia);
    }

    #[tokio::test]
    async fn carregar_sem_loja_definida_nao_faz_nada() {
        let service = crate::config::testes::estado_simulado().produto_service;
        let mut tela = ProdutosTela::nova(service);
        tela.carregar().await;
        assert_eq!(*tela.estado(), EstadoTela::NaoIniciada);
    }

    #[tokio::test]
    async fn carregar_em_modo_simulado_traz_amostras() {
        let mut tela = tela_com_produtos();
        tela.carregar().await;
        assert_eq!(*tela.estado(), EstadoTela::Pronta);
        assert_eq!(tela.exibidos().len(), 3);
        assert_eq!(tela.exibidos()[0].nome_produto, "Capacete MTB");
    }
}
