use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("invalid attribute name '{0}' (only ASCII letters, digits and '-' allowed)")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, AttributeError>;
