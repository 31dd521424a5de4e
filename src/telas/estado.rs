// src/telas/estado.rs

/// Ciclo de vida de uma tela de dados. Substitui as flags booleanas de
/// loading/erro por uma união etiquetada: a tela está em exatamente um
/// desses estados, e `Falha` sempre encerra o `Carregando` — não existe
/// caminho que deixe a tela carregando para sempre após um erro.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EstadoTela {
    #[default]
    NaoIniciada,
    Carregando,
    Pronta,
    /// Busca bem-sucedida com resultado vazio; é um estado próprio de
    /// exibição, não um erro.
    Vazia,
    Falha(String),
}

impl EstadoTela {
    pub fn esta_carregando(&self) -> bool {
        matches!(self, EstadoTela::Carregando)
    }

    pub fn falhou(&self) -> bool {
        matches!(self, EstadoTela::Falha(_))
    }

    /// Estado resultante de uma busca de lista.
    pub(crate) fn de_lista<T>(itens: &[T]) -> EstadoTela {
        if itens.is_empty() {
            EstadoTela::Vazia
        } else {
            EstadoTela::Pronta
        }
    }
}
