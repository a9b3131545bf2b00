use {std::time::Duration, tokio::time::Instant};

/// A value plus the moment it was fetched.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub fetched_at: Instant,
}

impl<T> Timed<T> {
    pub fn now(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    /// Stale once `age() >= window`. A zero window is always stale.
    pub fn is_stale(&self, window: Duration) -> bool {
        self.age() >= window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn becomes_stale_after_window() {
        let timed = Timed::now(42);
        let window = Duration::from_secs(30);
        assert!(!timed.is_stale(window));
        tokio::time::advance(Duration::from_secs(29)).await;
        assert!(!timed.is_stale(window));
        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(timed.is_stale(window));
        assert!(Timed::now(0).is_stale(Duration::ZERO));
    }
}
