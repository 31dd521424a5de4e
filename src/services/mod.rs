pub mod agendamento;
pub mod auth;
pub mod loja;
pub mod produto;
pub mod servico;

use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::common::error::AppError;

/// Anexa uma imagem local como campo binário de um formulário
/// multipart. Nome do arquivo vem do caminho; o MIME vem da extensão,
/// com `image/jpeg` quando ela não é reconhecida. Arquivo ilegível é
/// pulado e o formulário segue só com os campos escalares.
pub(crate) async fn anexar_imagem(
    form: Form,
    caminho: &Path,
    campo: &str,
) -> Result<Form, AppError> {
    let dados = match tokio::fs::read(caminho).await {
        Ok(dados) => dados,
        Err(erro) => {
            tracing::warn!(caminho = %caminho.display(), %erro, "imagem não encontrada; enviando sem anexo");
            return Ok(form);
        }
    };

    let nome = caminho
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("imagem.jpg")
        .to_string();
    let mime = mime_guess::from_path(caminho).first_or(mime_guess::mime::IMAGE_JPEG);

    let parte = Part::bytes(dados)
        .file_name(nome)
        .mime_str(mime.as_ref())
        .map_err(|e| anyhow::anyhow!("tipo MIME inválido para upload: {e}"))?;

    Ok(form.part(campo.to_string(), parte))
}
