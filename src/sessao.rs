// src/sessao.rs
//
// Armazenamento local de identidade: um arquivo JSON chave-valor que
// sobrevive a reinícios do aplicativo. Guarda o id do ator logado
// (cliente ou loja) e os registros "simulados" do transporte de demo.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::common::error::AppError;

/// Chave do id do cliente logado.
pub const CHAVE_CLIENTE_ID: &str = "clienteId";
/// Chave do id da loja logada.
pub const CHAVE_LOJA_ID: &str = "lojaId";

/// Quem está logado neste dispositivo. A ausência de ambos as chaves
/// significa "deslogado".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ator {
    Cliente(i64),
    Loja(i64),
}

/// Store chave-valor com escrita direta em disco. Leituras são muito
/// mais frequentes que escritas (toda tela lê o id no carregamento;
/// escrita só acontece em login/logout), daí o RwLock.
#[derive(Clone)]
pub struct SessaoStore {
    caminho: PathBuf,
    dados: Arc<RwLock<HashMap<String, String>>>,
}

impl SessaoStore {
    /// Abre (ou cria) o arquivo de sessão no caminho dado.
    pub fn abrir(caminho: impl AsRef<Path>) -> Result<Self, AppError> {
        let caminho = caminho.as_ref().to_path_buf();
        let dados = if caminho.exists() {
            let conteudo = std::fs::read_to_string(&caminho)?;
            serde_json::from_str(&conteudo)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            caminho,
            dados: Arc::new(RwLock::new(dados)),
        })
    }

    pub fn definir(&self, chave: &str, valor: &str) -> Result<(), AppError> {
        let mut dados = self
            .dados
            .write()
            .unwrap_or_else(|envenenado| envenenado.into_inner());
        dados.insert(chave.to_string(), valor.to_string());
        self.persistir(&dados)
    }

    pub fn obter(&self, chave: &str) -> Option<String> {
        let dados = self
            .dados
            .read()
            .unwrap_or_else(|envenenado| envenenado.into_inner());
        dados.get(chave).cloned()
    }

    pub fn remover(&self, chave: &str) -> Result<(), AppError> {
        let mut dados = self
            .dados
            .write()
            .unwrap_or_else(|envenenado| envenenado.into_inner());
        dados.remove(chave);
        self.persistir(&dados)
    }

    /// Decide o modo de boot do aplicativo. Se por algum defeito as duas
    /// chaves existirem, o cliente tem precedência.
    pub fn ator_atual(&self) -> Option<Ator> {
        if let Some(id) = self.obter_id(CHAVE_CLIENTE_ID) {
            return Some(Ator::Cliente(id));
        }
        if let Some(id) = self.obter_id(CHAVE_LOJA_ID) {
            return Some(Ator::Loja(id));
        }
        None
    }

    fn obter_id(&self, chave: &str) -> Option<i64> {
        self.obter(chave).and_then(|v| v.parse().ok())
    }

    fn persistir(&self, dados: &HashMap<String, String>) -> Result<(), AppError> {
        let conteudo = serde_json::to_string_pretty(dados)?;
        std::fs::write(&self.caminho, conteudo)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valor_persiste_entre_aberturas() {
        let dir = tempfile::tempdir().unwrap();
        let caminho = dir.path().join("sessao.json");

        let sessao = SessaoStore::abrir(&caminho).unwrap();
        sessao.definir(CHAVE_CLIENTE_ID, "42").unwrap();
        drop(sessao);

        let reaberta = SessaoStore::abrir(&caminho).unwrap();
        assert_eq!(reaberta.obter(CHAVE_CLIENTE_ID).as_deref(), Some("42"));
        assert_eq!(reaberta.ator_atual(), Some(Ator::Cliente(42)));
    }

    #[test]
    fn remover_deixa_sessao_deslogada() {
        let dir = tempfile::tempdir().unwrap();
        let sessao = SessaoStore::abrir(dir.path().join("s.json")).unwrap();

        sessao.definir(CHAVE_LOJA_ID, "7").unwrap();
        assert_eq!(sessao.ator_atual(), Some(Ator::Loja(7)));

        sessao.remover(CHAVE_LOJA_ID).unwrap();
        assert_eq!(sessao.ator_atual(), None);
        assert_eq!(sessao.obter(CHAVE_LOJA_ID), None);
    }

    #[test]
    fn cliente_tem_precedencia_sobre_loja() {
        let dir = tempfile::tempdir().unwrap();
        let sessao = SessaoStore::abrir(dir.path().join("s.json")).unwrap();

        sessao.definir(CHAVE_LOJA_ID, "7").unwrap();
        sessao.definir(CHAVE_CLIENTE_ID, "3").unwrap();
        assert_eq!(sessao.ator_atual(), Some(Ator::Cliente(3)));
    }
}
