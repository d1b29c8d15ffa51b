use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub time_limit: Duration,
    pub question_count: usize,
    pub shuffle: bool,
}

impl Settings {
    pub fn time_limit_from_secs(seconds: i64) -> Duration {
        if seconds <= 0 {
            Duration::default()
        } else {
            Duration::from_secs(seconds as u64)
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_limit: Duration::from_secs(30),
            question_count: 5,
            shuffle: false,
        }
    }
}
