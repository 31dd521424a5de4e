pub mod agendamento;
pub mod auth;
pub mod cliente;
pub mod loja;
pub mod produto;
pub mod servico;

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::ValidationError;

use crate::common::format::somente_digitos;

/// Resposta genérica do backend para operações de escrita.
#[derive(Debug, Clone, Deserialize)]
pub struct RespostaMensagem {
    pub mensagem: String,
}

// ---
// Validações customizadas compartilhadas pelos payloads
// ---

pub(crate) fn validar_cpf(valor: &str) -> Result<(), ValidationError> {
    if somente_digitos(valor).len() != 11 {
        let mut err = ValidationError::new("cpf");
        err.message = Some("CPF inválido".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validar_cnpj(valor: &str) -> Result<(), ValidationError> {
    if somente_digitos(valor).len() != 14 {
        let mut err = ValidationError::new("cnpj");
        err.message = Some("CNPJ inválido".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validar_cep(valor: &str) -> Result<(), ValidationError> {
    if somente_digitos(valor).len() != 8 {
        let mut err = ValidationError::new("cep");
        err.message = Some("CEP inválido".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validar_nao_negativo(valor: &Decimal) -> Result<(), ValidationError> {
    if valor.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documentos_validam_pela_contagem_de_digitos() {
        assert!(validar_cpf("123.456.789-01").is_ok());
        assert!(validar_cpf("123").is_err());
        assert!(validar_cnpj("12.345.678/0001-90").is_ok());
        assert!(validar_cnpj("12.345.678").is_err());
        assert!(validar_cep("01234-567").is_ok());
        assert!(validar_cep("0123").is_err());
    }

    #[test]
    fn preco_negativo_eh_rejeitado() {
        assert!(validar_nao_negativo(&Decimal::new(-1, 2)).is_err());
        assert!(validar_nao_negativo(&Decimal::ZERO).is_ok());
    }
}
