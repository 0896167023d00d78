use ilars_core::models::series::{ChartDataResponse, ScorePoint};

use crate::error::ChartError;

/// Unwrap a `{status, data}` chart-data envelope, rejecting anything other
/// than `status: "ok"`.
pub fn score_points(response: ChartDataResponse) -> Result<Vec<ScorePoint>, ChartError> {
    if response.status != "ok" {
        return Err(ChartError::BadStatus(response.status));
    }
    Ok(response.data)
}
