use crate::error::LocationError;
use crate::models::GeoPosition;
use async_trait::async_trait;
use std::time::Duration;

/// Source of the device's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<GeoPosition, LocationError>;

    fn provider_name(&self) -> &'static str;
}

/// Ask `provider` for a position, giving up after `timeout`.
///
/// Dropping the returned future cancels the request.
pub async fn acquire_position(
    provider: &dyn LocationProvider,
    timeout: Duration,
) -> Result<GeoPosition, LocationError> {
    tracing::debug!(
        provider = provider.provider_name(),
        timeout_ms = timeout.as_millis() as u64,
        "Requesting current position"
    );

    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(Ok(position)) if position.is_valid() => Ok(position),
        Ok(Ok(position)) => Err(LocationError::Unavailable(format!(
            "provider returned invalid position {:?}",
            position
        ))),
        Ok(Err(e)) => {
            tracing::warn!(provider = provider.provider_name(), "Location request failed: {}", e);
            Err(e)
        }
        Err(_) => {
            tracing::warn!(
                provider = provider.provider_name(),
                "Location request timed out after {:?}",
                timeout
            );
            Err(LocationError::Timeout(timeout))
        }
    }
}

/// Provider backed by a configured position, or nothing at all.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    position: Option<GeoPosition>,
}

impl FixedLocationProvider {
    pub fn new(position: Option<GeoPosition>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<GeoPosition, LocationError> {
        self.position.ok_or_else(|| {
            LocationError::Unavailable(
                "no device position configured (set TOURPLAN_LAT and TOURPLAN_LNG)".to_string(),
            )
        })
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    struct NeverResolves;

    #[async_trait]
    impl LocationProvider for NeverResolves {
        async fn current_position(&self) -> Result<GeoPosition, LocationError> {
            std::future::pending().await
        }

        fn provider_name(&self) -> &'static str {
            "never"
        }
    }

    #[tokio::test]
    async fn fixed_provider_returns_configured_position() {
        let paris = Coordinates::new(48.8566, 2.3522).unwrap();
        let provider = FixedLocationProvider::new(Some(paris));
        let position = acquire_position(&provider, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(position, paris);
    }

    #[tokio::test]
    async fn fixed_provider_without_position_is_unavailable() {
        let provider = FixedLocationProvider::new(None);
        let err = acquire_position(&provider, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, LocationError::Unavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out() {
        let err = acquire_position(&NeverResolves, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(err, LocationError::Timeout(Duration::from_secs(5)));
    }
}
