// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::{validar_cep, validar_cnpj, validar_cpf};

// Dados para registro de um novo cliente (ciclista)
#[derive(Debug, Serialize, Validate)]
pub struct RegistroClientePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    #[validate(range(min = 1, max = 120, message = "Idade inválida."))]
    pub idade: u8,

    #[validate(custom(function = validar_cpf))]
    pub cpf: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
}

impl RegistroClientePayload {
    /// Confere a senha com o campo de confirmação do formulário, no
    /// mesmo formato de erro do Validator.
    pub fn conferir_senha(&self, confirmacao: &str) -> Result<(), ValidationErrors> {
        conferir_senhas(&self.senha, confirmacao)
    }
}

// Dados para login de cliente
#[derive(Debug, Serialize, Validate)]
pub struct LoginClientePayload {
    #[validate(custom(function = validar_cpf))]
    pub cpf: String,

    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub senha: String,
}

// Dados para registro de uma nova loja
#[derive(Debug, Serialize, Validate)]
pub struct RegistroLojaPayload {
    #[validate(length(min = 1, message = "O nome da loja é obrigatório."))]
    pub nome_loja: String,

    #[validate(custom(function = validar_cnpj))]
    pub cnpj: String,

    #[validate(custom(function = validar_cep))]
    pub cep: String,

    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub endereco: String,

    pub complemento: String,
    pub lote: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,

    // Geolocalização é opcional no cadastro; quando ausente, o campo
    // não vai no corpo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl RegistroLojaPayload {
    pub fn conferir_senha(&self, confirmacao: &str) -> Result<(), ValidationErrors> {
        conferir_senhas(&self.senha, confirmacao)
    }
}

// Dados para login de loja
#[derive(Debug, Serialize, Validate)]
pub struct LoginLojaPayload {
    #[validate(custom(function = validar_cnpj))]
    pub cnpj: String,

    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub senha: String,
}

// Resposta de registro/login; o backend devolve o id do ator criado ou
// autenticado junto com a mensagem.
#[derive(Debug, Clone, Deserialize)]
pub struct RespostaAuth {
    pub mensagem: String,
    #[serde(default)]
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub loja_id: Option<i64>,
}

fn conferir_senhas(senha: &str, confirmacao: &str) -> Result<(), ValidationErrors> {
    if senha != confirmacao {
        let mut err = ValidationError::new("senha");
        err.message = Some("As senhas não coincidem".into());
        let mut errors = ValidationErrors::new();
        errors.add("senha", err);
        return Err(errors);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn payload_valido() -> RegistroClientePayload {
        RegistroClientePayload {
            nome: "Ana".into(),
            idade: 28,
            cpf: "123.456.789-01".into(),
            senha: "segredo".into(),
        }
    }

    #[test]
    fn registro_valido_passa() {
        assert!(payload_valido().validate().is_ok());
    }

    #[test]
    fn idade_fora_da_faixa_eh_rejeitada() {
        let mut payload = payload_valido();
        payload.idade = 0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn cpf_incompleto_eh_rejeitado() {
        let mut payload = payload_valido();
        payload.cpf = "123.456".into();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn senhas_diferentes_sao_rejeitadas() {
        let payload = payload_valido();
        assert!(payload.conferir_senha("segredo").is_ok());
        assert!(payload.conferir_senha("outra").is_err());
    }

    #[test]
    fn geolocalizacao_ausente_nao_vai_no_corpo() {
        let payload = RegistroLojaPayload {
            nome_loja: "Bike Shop".into(),
            cnpj: "12.345.678/0001-90".into(),
            cep: "01234-567".into(),
            endereco: "Av. das Bicicletas, 123".into(),
            complemento: String::new(),
            lote: "10".into(),
            senha: "segredo".into(),
            latitude: None,
            longitude: None,
        };
        let corpo = serde_json::to_value(&payload).unwrap();
        assert!(corpo.get("latitude").is_none());
        assert!(corpo.get("longitude").is_none());
    }
}
