use std::time::{Instant, SystemTime};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    rng_seed: Option<u64>,
}

impl AppState {
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            rng_seed,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rng_seed)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    /// A generator owned by a single request. With a configured seed every
    /// request starts from the same state, so identical payloads produce
    /// identical responses.
    pub fn request_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_repeatable() {
        let state = AppState::new(Some(7));
        let a: u64 = state.request_rng().random();
        let b: u64 = state.request_rng().random();
        assert_eq!(a, b);
    }
}
