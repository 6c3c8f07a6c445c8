use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.spacexdata.com/v5/launches/latest";

#[derive(Debug, Deserialize)]
pub struct WebServerSettings {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamSettings {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SentrySettings {
    pub dsn: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: WebServerSettings,
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub sentry: SentrySettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut s = Self::defaults()?;
        s.merge(File::with_name("config/local").required(false))?;
        s.merge(Environment::with_prefix("app").separator("__"))?;
        s.try_into()
    }

    fn defaults() -> Result<Config, ConfigError> {
        let mut s = Config::new();
        s.set_default("server.address", "0.0.0.0")?;
        s.set_default("server.port", 4000_i64)?;
        s.set_default("upstream.url", DEFAULT_UPSTREAM_URL)?;
        Ok(s)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.address, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_endpoint() {
        let settings: Settings = Settings::defaults().unwrap().try_into().unwrap();
        assert_eq!(settings.bind_address(), "0.0.0.0:4000");
        assert_eq!(settings.upstream.url, DEFAULT_UPSTREAM_URL);
        assert!(settings.sentry.dsn.is_none());
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut s = Settings::defaults().unwrap();
        s.set("server.port", 8080_i64).unwrap();
        s.set("sentry.dsn", "https://key@sentry.example.com/1").unwrap();
        let settings: Settings = s.try_into().unwrap();
        assert_eq!(settings.bind_address(), "0.0.0.0:8080");
        assert_eq!(
            settings.sentry.dsn.as_deref(),
            Some("https://key@sentry.example.com/1")
        );
    }
}
