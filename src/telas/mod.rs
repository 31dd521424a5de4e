// src/telas/mod.rs
//
// View-models das telas: cada tela guarda o resultado cru da última
// busca, uma lista derivada de exibição (filtro/ordenação aplicados em
// memória, sem nova requisição) e o estado do ciclo de vida. Ações de
// escrita aplicam um remendo otimista no resultado cru após o sucesso
// da chamada, sem recarregar tudo.

pub mod agendamentos;
pub mod buscar;
pub mod dashboard;
pub mod estado;
pub mod horarios;
pub mod perfil_loja;
pub mod produtos;
pub mod servicos;

pub use estado::EstadoTela;
