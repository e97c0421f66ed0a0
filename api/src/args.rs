use std::time::Duration;

use clap::{ArgAction, Parser};
use nutrilens_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, NutrilensConfig,
};

/// Default request body cap; base64 images are large.
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens-api", version, about = "Food image nutrition analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list; `*` mirrors any request origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "max-body-bytes", env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(
        long = "llm-json-mode",
        env = "LLM_JSON_MODE",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub json_mode: bool,
}

impl std::fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmArgs")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("json_mode", &self.json_mode)
            .finish()
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        NutrilensConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
                json_mode: args.llm.json_mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["nutrilens-api", "--gemini-api-key", "k"]).unwrap();
        assert_eq!(args.server.allowed_origins, vec!["*".to_string()]);
        assert_eq!(args.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(args.llm.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(args.llm.timeout_secs, 60);
        assert!(!args.llm.json_mode);
    }

    #[test]
    fn test_origin_list_and_config_conversion() {
        let args = Args::try_parse_from([
            "nutrilens-api",
            "--gemini-api-key",
            "k",
            "--allowed-origins",
            "https://a.example,https://b.example",
            "--llm-timeout-secs",
            "5",
            "--llm-json-mode",
            "true",
        ])
        .unwrap();
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = NutrilensConfig::from(args);
        assert_eq!(config.llm.timeout, Duration::from_secs(5));
        assert!(config.llm.json_mode);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let args = Args::try_parse_from(["nutrilens-api", "--gemini-api-key", "s3cr3t"]).unwrap();
        assert!(!format!("{:?}", args).contains("s3cr3t"));
    }
}
