use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),
}
