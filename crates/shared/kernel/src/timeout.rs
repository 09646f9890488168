use std::borrow::Cow;
use std::future::Future;
use std::time::Duration;

#[df_derive::df_error]
pub enum TimeoutError {
    #[error("Operation timed out after {after:?}{}", format_context(.context))]
    Elapsed { after: Duration, context: Option<Cow<'static, str>> },
}

/// Races `operation` against a timer.
///
/// When the timer fires first the operation future is dropped, which cancels whatever it had
/// in flight.
pub async fn with_timeout<F>(duration: Duration, operation: F) -> Result<F::Output, TimeoutError>
where
    F: Future,
{
    tokio::time::timeout(duration, operation)
        .await
        .map_err(|_| TimeoutError::Elapsed { after: duration, context: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_operation_completes() {
        let out = with_timeout(Duration::from_secs(1), async { 5 }).await;
        assert_eq!(out.ok(), Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_operation_is_cancelled() {
        let dropped = Arc::new(AtomicBool::new(false));
        let flag = DropFlag(Arc::clone(&dropped));

        let err = with_timeout(Duration::from_millis(12_000), async move {
            let _flag = flag;
            tokio::time::sleep(Duration::from_secs(60)).await;
        })
        .await
        .unwrap_err();

        assert!(matches!(err, TimeoutError::Elapsed { after, .. } if after.as_millis() == 12_000));
        assert!(dropped.load(Ordering::SeqCst), "operation should be dropped on timeout");
    }

    #[test]
    fn test_context_is_rendered() {
        let result: Result<(), TimeoutError> =
            Err(TimeoutError::Elapsed { after: Duration::from_millis(5), context: None });
        let err = result.context("lead submission").unwrap_err();
        assert_eq!(err.to_string(), "Operation timed out after 5ms (lead submission)");
    }
}
