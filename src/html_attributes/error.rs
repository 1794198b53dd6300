use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0:#}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid template data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
