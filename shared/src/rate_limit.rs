use std::collections::HashMap;

pub const RATE_LIMIT_WINDOW_MS: f64 = 60_000.0;
pub const RATE_LIMIT_MAX_ATTEMPTS: usize = 5;

pub const ADMIN_LOGIN_KEY: &str = "admin_login";

pub const LOGIN_RATE_LIMIT_ERROR: &str = "Too many login attempts. Please try again later.";

/// Fixed-window attempt tracker keyed by action name. Timestamps come
/// from the caller in milliseconds, so the limiter never reads a clock
/// of its own.
#[derive(Debug, Default)]
pub struct RateLimiter {
    attempts: HashMap<String, Vec<f64>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an attempt under `key` and reports whether it is
    /// allowed. Attempts older than the window are dropped first; a
    /// blocked call is not itself recorded, so the window is not
    /// extended by hammering.
    pub fn check(&mut self, key: &str, now_ms: f64) -> bool {
        let window = self.attempts.entry(key.to_string()).or_default();
        window.retain(|&at| now_ms - at < RATE_LIMIT_WINDOW_MS);

        if window.len() >= RATE_LIMIT_MAX_ATTEMPTS {
            log::warn!("rate limit exceeded for {}", key);
            return false;
        }

        window.push(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max_attempts() {
        let mut limiter = RateLimiter::new();
        for i in 0..RATE_LIMIT_MAX_ATTEMPTS {
            assert!(limiter.check(ADMIN_LOGIN_KEY, i as f64 * 100.0));
        }
        assert!(!limiter.check(ADMIN_LOGIN_KEY, 1_000.0));
    }

    #[test]
    fn test_window_expiry_readmits() {
        let mut limiter = RateLimiter::new();
        for _ in 0..RATE_LIMIT_MAX_ATTEMPTS {
            assert!(limiter.check(ADMIN_LOGIN_KEY, 0.0));
        }
        assert!(!limiter.check(ADMIN_LOGIN_KEY, RATE_LIMIT_WINDOW_MS - 1.0));
        assert!(limiter.check(ADMIN_LOGIN_KEY, RATE_LIMIT_WINDOW_MS));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut limiter = RateLimiter::new();
        for _ in 0..RATE_LIMIT_MAX_ATTEMPTS {
            assert!(limiter.check(ADMIN_LOGIN_KEY, 0.0));
        }
        assert!(!limiter.check(ADMIN_LOGIN_KEY, 1.0));
        assert!(limiter.check("something_else", 1.0));
    }

    #[test]
    fn test_blocked_attempts_do_not_extend_the_window() {
        let mut limiter = RateLimiter::new();
        for _ in 0..RATE_LIMIT_MAX_ATTEMPTS {
            limiter.check(ADMIN_LOGIN_KEY, 0.0);
        }
        // Hammering while blocked must not push the reset further out.
        for ms in (1_000..60_000).step_by(1_000) {
            assert!(!limiter.check(ADMIN_LOGIN_KEY, ms as f64));
        }
        assert!(limiter.check(ADMIN_LOGIN_KEY, RATE_LIMIT_WINDOW_MS + 1.0));
    }
}
