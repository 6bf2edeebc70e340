use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Seed for per-request random generators. Unset means fresh entropy per request.
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Reads `HOST`, `PORT`, `RUST_LOG` and `RNG_SEED`. Values that fail to
    /// parse are ignored in favour of the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env_parse("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT").unwrap_or(defaults.port),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            rng_seed: env_parse("RNG_SEED"),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            rng_seed: None,
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("ignoring invalid {key}={raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:5001");
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_env_parse_rejects_garbage() {
        std::env::set_var("EDU_AI_TEST_PORT", "not-a-port");
        assert_eq!(env_parse::<u16>("EDU_AI_TEST_PORT"), None);
        std::env::set_var("EDU_AI_TEST_PORT", " 8080 ");
        assert_eq!(env_parse::<u16>("EDU_AI_TEST_PORT"), Some(8080));
        assert_eq!(env_parse::<u16>("EDU_AI_TEST_UNSET_KEY"), None);
    }
}
