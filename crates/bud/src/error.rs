use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Ledger(#[from] ledger::LedgerError),
    #[error("cancelled, nothing saved")]
    Cancelled,
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Ledger(err) if err.is_user_input() => 2,
            _ => 1,
        }
    }
}
