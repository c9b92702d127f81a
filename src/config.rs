// Application configuration, loaded once at startup from the environment.
// A `.env` file is honored when present (local development).

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);
        Self { host, port }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_fall_back_to_defaults_when_the_environment_is_empty() {
        let config = Config::from_env();
        assert!(!config.host.is_empty());
        assert!(config.port > 0);
    }
}
