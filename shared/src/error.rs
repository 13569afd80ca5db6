use thiserror::Error;

/// Errors raised while interpreting dashboard inputs (select values, kind labels, config).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("unknown period value: {0:?}")]
    UnknownPeriod(String),

    #[error("unknown transaction kind: {0:?}")]
    UnknownTransactionKind(String),

    #[error("animation must have at least one step")]
    ZeroAnimationSteps,

    #[error("invalid dashboard config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
