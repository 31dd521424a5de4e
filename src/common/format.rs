// Máscaras de documentos brasileiros usadas nos formulários de cadastro.
// A máscara é progressiva: aplica os separadores conforme os dígitos vão
// sendo digitados e trunca o excedente.

pub fn somente_digitos(texto: &str) -> String {
    texto.chars().filter(char::is_ascii_digit).collect()
}

/// Máscara de CPF: XXX.XXX.XXX-XX
pub fn formatar_cpf(texto: &str) -> String {
    let d = somente_digitos(texto);
    let d = &d[..d.len().min(11)];
    match d.len() {
        0..=3 => d.to_string(),
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Máscara de CNPJ: XX.XXX.XXX/XXXX-XX
pub fn formatar_cnpj(texto: &str) -> String {
    let d = somente_digitos(texto);
    let d = &d[..d.len().min(14)];
    match d.len() {
        0..=2 => d.to_string(),
        3..=5 => format!("{}.{}", &d[..2], &d[2..]),
        6..=8 => format!("{}.{}.{}", &d[..2], &d[2..5], &d[5..]),
        9..=12 => format!("{}.{}.{}/{}", &d[..2], &d[2..5], &d[5..8], &d[8..]),
        _ => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        ),
    }
}

/// Máscara de CEP: XXXXX-XXX
pub fn formatar_cep(texto: &str) -> String {
    let d = somente_digitos(texto);
    let d = &d[..d.len().min(8)];
    if d.len() > 5 {
        format!("{}-{}", &d[..5], &d[5..])
    } else {
        d.to_string()
    }
}
