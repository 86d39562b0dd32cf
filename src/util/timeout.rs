//! Per-call deadline helper.

use std::future::Future;
use std::time::Duration;

use crate::error::VoiceError;

/// Wrap a future with a deadline; expiry surfaces as a timed-out transport error.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, VoiceError>>,
) -> Result<T, VoiceError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(VoiceError::timeout(duration)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn expired_deadline_is_timeout() {
        let err = with_timeout(Duration::from_secs(1), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, VoiceError>(())
        })
        .await
        .unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn completed_future_passes_through() {
        let value = with_timeout(Duration::from_secs(1), async { Ok::<_, VoiceError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }
}
