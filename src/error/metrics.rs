use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to create latency histogram: {message}")]
    HistogramCreate { message: String },
}
