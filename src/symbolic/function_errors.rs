use thiserror::Error;

/// Errors reported by quadrature, the factory's arity checks, task configuration and
/// table export. Evaluation, differentiation and rendering never fail.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("task configuration error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
