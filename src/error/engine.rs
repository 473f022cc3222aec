use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("In-flight window grew to {size} with a limit of {limit}.")]
    WindowOverflow { size: usize, limit: usize },
}
