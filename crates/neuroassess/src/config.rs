//! Runtime settings read from the process environment.
//!
//! `.env` files are honoured by the binary (it calls `dotenvy::dotenv()`
//! before [`Settings::from_env`]). Only `GROQ_API_KEY` is required, and only
//! by commands that actually talk to the model.
use std::{fmt, str::FromStr, time::Duration};

use neuroassess_core::{
    client::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE},
    error::{AssessError, Result},
    model::Model,
};
use tracing_subscriber::EnvFilter;

pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";
pub const MODEL_ENV: &str = "NEUROASSESS_MODEL";
pub const TEMPERATURE_ENV: &str = "NEUROASSESS_TEMPERATURE";
pub const MAX_TOKENS_ENV: &str = "NEUROASSESS_MAX_TOKENS";
pub const TIMEOUT_ENV: &str = "NEUROASSESS_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LOG_FILTER: &str = "neuroassess=info";

#[derive(Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Model,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut settings = Settings {
            base_url: get(BASE_URL_ENV),
            ..Settings::default()
        };
        #[cfg(feature = "groq")]
        {
            settings.api_key = get(neuroassess_groq::API_KEY_ENV);
        }

        if let Some(model) = get(MODEL_ENV) {
            settings.model = Model::from_id(&model);
        }
        if let Some(raw) = get(TEMPERATURE_ENV) {
            settings.temperature = parse(TEMPERATURE_ENV, &raw)?;
            if !(0.0..=2.0).contains(&settings.temperature) {
                return Err(invalid(TEMPERATURE_ENV, &raw, "expected 0.0 to 2.0"));
            }
        }
        if let Some(raw) = get(MAX_TOKENS_ENV) {
            settings.max_tokens = parse(MAX_TOKENS_ENV, &raw)?;
            if settings.max_tokens == 0 {
                return Err(invalid(MAX_TOKENS_ENV, &raw, "expected a positive number"));
            }
        }
        if let Some(raw) = get(TIMEOUT_ENV) {
            let secs: u64 = parse(TIMEOUT_ENV, &raw)?;
            if secs == 0 {
                return Err(invalid(TIMEOUT_ENV, &raw, "expected a positive number"));
            }
            settings.timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }

    /// Build the completion client used for every request of the process.
    ///
    /// # Errors
    ///
    /// [`AssessError::Configuration`] when no API key is available.
    #[cfg(feature = "groq")]
    pub fn completion_client(
        &self,
    ) -> Result<neuroassess_core::CompletionClient<neuroassess_groq::GroqAdapter>> {
        let mut builder = neuroassess_groq::GroqAdapterBuilder::new().with_timeout(self.timeout);
        if let Some(api_key) = &self.api_key {
            builder = builder.with_api_key(api_key);
        }
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url);
        }

        let backend = builder.build()?;
        Ok(
            neuroassess_core::CompletionClient::new(backend, self.model.clone())
                .with_temperature(self.temperature)
                .with_max_tokens(self.max_tokens),
        )
    }
}

/// Log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`] when the
/// variable is unset, blank or unparsable.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn parse<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| invalid(key, raw, "value could not be parsed"))
}

fn invalid(key: &str, raw: &str, reason: &str) -> AssessError {
    AssessError::Configuration(format!("`{key}`={raw:?}: {reason}"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use neuroassess_core::model::GroqModel;
    #[cfg(feature = "groq")]
    use neuroassess_groq::API_KEY_ENV;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = settings(&[]).unwrap();
        assert!(settings.api_key.is_none());
        assert_eq!(settings.model, Model::Groq(GroqModel::Llama3_8b));
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.max_tokens, 4096);
        assert_eq!(settings.timeout, Duration::from_secs(120));
    }

    #[test]
    fn overrides_are_parsed() {
        let settings = settings(&[
            (MODEL_ENV, "llama-3.3-70b-versatile"),
            (TEMPERATURE_ENV, "0.2"),
            (MAX_TOKENS_ENV, "1024"),
            (TIMEOUT_ENV, "30"),
        ])
        .unwrap();

        assert_eq!(settings.model, Model::Groq(GroqModel::Llama33_70bVersatile));
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(settings.max_tokens, 1024);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[cfg(feature = "groq")]
    #[test]
    fn key_is_read_from_the_groq_variable() {
        let settings = settings(&[(API_KEY_ENV, "gsk_abc")]).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("gsk_abc"));
    }

    #[cfg(feature = "groq")]
    #[test]
    fn blank_key_counts_as_missing() {
        let settings = settings(&[(API_KEY_ENV, "  ")]).unwrap();
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn rust_log_overrides_the_default_filter() {
        use tracing::level_filters::LevelFilter;

        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("neuroassess=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        assert!(settings(&[(TEMPERATURE_ENV, "warm")]).unwrap_err().is_configuration());
        assert!(settings(&[(TEMPERATURE_ENV, "3.5")]).unwrap_err().is_configuration());
        assert!(settings(&[(MAX_TOKENS_ENV, "0")]).unwrap_err().is_configuration());
        assert!(settings(&[(TIMEOUT_ENV, "-1")]).unwrap_err().is_configuration());
    }

    #[cfg(feature = "groq")]
    #[test]
    fn debug_output_redacts_the_key() {
        let settings = settings(&[(API_KEY_ENV, "gsk_secret")]).unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[cfg(feature = "groq")]
    #[test]
    fn client_needs_a_key() {
        let err = settings(&[]).unwrap().completion_client().err().unwrap();
        assert!(err.is_configuration());

        let client = settings(&[(API_KEY_ENV, "gsk_abc"), (MAX_TOKENS_ENV, "512")])
            .unwrap()
            .completion_client()
            .unwrap();
        assert_eq!(client.max_tokens(), 512);
    }
}
