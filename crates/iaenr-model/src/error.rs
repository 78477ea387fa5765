use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid district id '{0}': expected exactly four digits")]
    InvalidDistrictId(String),
    #[error("unknown grade level '{0}'")]
    UnknownGradeLevel(String),
    #[error("unknown subgroup '{0}'")]
    UnknownSubgroup(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
