use plotters::prelude::{BitMapBackend, DrawingAreaErrorKind, DrawingBackend};
use thiserror::Error;

use super::{ConfigError, EngineError, MetricsError, ValidationError, VenueError};

type PlottersError = DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Plotting error: {source}")]
    Plotters {
        #[from]
        source: PlottersError,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Venue error: {0}")]
    Venue(#[from] VenueError),
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn venue<E>(error: E) -> Self
    where
        E: Into<VenueError>,
    {
        error.into().into()
    }

    pub fn engine<E>(error: E) -> Self
    where
        E: Into<EngineError>,
    {
        error.into().into()
    }

    pub fn metrics<E>(error: E) -> Self
    where
        E: Into<MetricsError>,
    {
        error.into().into()
    }
}
