use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlatbedError {
    #[error("erro de configuração: {0}")]
    Config(String),

    #[error("erro ao ler JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("erro ao gerar PDF: {0}")]
    PdfGeneration(String),

    #[error("erro ao gerar Excel: {0}")]
    ExcelGeneration(String),

    #[error("campo obrigatório ausente: --{0}")]
    MissingField(&'static str),

    #[error("data inválida: {0} (use AAAA-MM-DD)")]
    InvalidDate(String),

    #[error(transparent)]
    Common(#[from] flatbed_log_common::Error),
}

pub type Result<T> = std::result::Result<T, FlatbedError>;
