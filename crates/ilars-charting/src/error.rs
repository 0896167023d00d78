use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart data response status was '{0}', expected 'ok'")]
    BadStatus(String),
}
