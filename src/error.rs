use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("series `{series}` has {actual} values but the chart has {expected} labels")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
