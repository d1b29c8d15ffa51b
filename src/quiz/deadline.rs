use crossbeam::channel::{self, Receiver};
use std::time::{Duration, Instant};

// Stand-in expiry for budgets too large to represent as an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Single countdown shared by every question of a session.
///
/// The expiry instant is fixed once by `start`. Each waiter gets its own
/// signal receiver, all of them firing at that same instant.
#[derive(Clone, Debug)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn start(duration: Duration) -> Self {
        log::debug!("Starting quiz deadline: {:?}", duration);
        let now = Instant::now();
        let expires_at = now
            .checked_add(duration)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        Deadline { expires_at }
    }

    pub fn has_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    pub fn time_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    pub fn expired_signal(&self) -> Receiver<Instant> {
        channel::at(self.expires_at)
    }
}
