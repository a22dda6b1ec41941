use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// 输入防抖：窗口期内只有最后一次调用会放行
///
/// ```ignore
/// if debouncer.settle().await {
///     search(keyword).await;
/// }
/// ```
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 等待一个防抖窗口，期间没有更新的调用时返回 true
    pub async fn settle(&self) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// 作废所有等待中的调用
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_only_last_call_fires() {
        let debouncer = Debouncer::from_millis(30);
        let (a, b, c) = tokio::join!(debouncer.settle(), debouncer.settle(), debouncer.settle());
        assert_eq!((a, b, c), (false, false, true));
    }

    #[tokio::test]
    async fn test_calls_outside_window_all_fire() {
        let debouncer = Debouncer::from_millis(5);
        assert!(debouncer.settle().await);
        assert!(debouncer.settle().await);
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_call() {
        let debouncer = Debouncer::from_millis(20);
        let (fired, _) = tokio::join!(debouncer.settle(), async { debouncer.cancel() });
        assert!(!fired);
    }
}
