use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::*;
use kenwell_boundary::HealthStatus;

const STATUS_HEALTHY: &str = "healthy";
const HEALTH_MESSAGE: &str = "Kenwell user administration services are running";

/// Unauthenticated liveness probe.
///
/// No input, no side effects; the timestamp is captured at response
/// time.
#[get("/health")]
pub fn get_health() -> Result<HealthStatus> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| ApiError::Other(anyhow::anyhow!(err)))?;
    Ok(Json(HealthStatus {
        status: STATUS_HEALTHY.into(),
        timestamp,
        message: HEALTH_MESSAGE.into(),
    }))
}
