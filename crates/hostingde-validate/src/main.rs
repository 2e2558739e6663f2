// # hostingde-validate
//
// Runs the hosting.de provider configure step outside of a plugin host and
// reports the result. This is a THIN integration layer: all resolution logic
// lives in hostingde-core.
//
// The binary is responsible for:
// 1. Reading its own settings from environment variables
// 2. Initializing logging
// 3. Loading the configuration payload
// 4. Running configure and building the resource handlers
//
// ## Configuration
//
// - `HOSTINGDE_CONFIG_FILE`: Path to a JSON provider configuration payload (optional)
// - `HOSTINGDE_LOG_LEVEL`: Log level (trace, debug, info, warn, error)
//
// The provider itself reads `HOSTINGDE_ACCOUNT_ID`, `HOSTINGDE_AUTH_TOKEN` and
// `HOSTINGDE_BASE_URL` as fallbacks for attributes missing from the payload.
//
// ## Example
//
// ```bash
// echo '{"account_id": "12345"}' > provider.json
// export HOSTINGDE_CONFIG_FILE=provider.json
// export HOSTINGDE_AUTH_TOKEN=your_token
//
// hostingde-validate
// ```

use anyhow::{Context, Result};
use hostingde_core::config::read_payload;
use hostingde_provider::HostingdeProvider;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Configuration is valid
/// - 1: Configuration produced error diagnostics
/// - 2: Runtime error (unreadable payload, logging setup)
#[derive(Debug, Clone, Copy)]
enum ValidateExitCode {
    /// Configure succeeded
    Valid = 0,
    /// Configure reported errors
    ConfigError = 1,
    /// Unexpected failure
    RuntimeError = 2,
}

impl From<ValidateExitCode> for ExitCode {
    fn from(code: ValidateExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application settings
struct Settings {
    config_file: Option<PathBuf>,
    log_level: Level,
}

impl Settings {
    /// Load settings from environment variables
    fn from_env() -> Result<Self> {
        let log_level = env::var("HOSTINGDE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        Ok(Self {
            config_file: env::var_os("HOSTINGDE_CONFIG_FILE").map(PathBuf::from),
            log_level: parse_log_level(&log_level)?,
        })
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "HOSTINGDE_LOG_LEVEL '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            level
        ),
    }
}

fn main() -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Settings error: {}", e);
            return ValidateExitCode::RuntimeError.into();
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ValidateExitCode::RuntimeError.into();
    }

    let provider = HostingdeProvider::new();
    match run(&settings, &provider) {
        Ok(true) => ValidateExitCode::Valid.into(),
        Ok(false) => ValidateExitCode::ConfigError.into(),
        Err(e) => {
            error!("Validation error: {:#}", e);
            ValidateExitCode::RuntimeError.into()
        }
    }
}

/// Run one configure cycle, returning whether it succeeded
fn run(settings: &Settings, provider: &HostingdeProvider) -> Result<bool> {
    let payload = match settings.config_file {
        Some(ref path) => read_payload(path)
            .with_context(|| format!("Failed to load provider configuration from {}", path.display()))?,
        None => serde_json::Value::Object(Default::default()),
    };

    info!("Validating {} provider configuration", provider.type_name());

    let response = provider.configure(&payload);

    for diagnostic in &response.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if !response.is_success() {
        error!(
            "Provider configuration is invalid: {} error(s)",
            response.diagnostics.error_count()
        );
        return Ok(false);
    }

    for resource in provider.create_resources(&response) {
        info!("Resource type ready: {}", resource.type_name());
    }
    for data_source in provider.create_data_sources(&response) {
        info!("Data source type ready: {}", data_source.type_name());
    }

    info!("Provider configuration is valid");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostingde_core::StaticEnv;
    use std::io::Write;
    use std::sync::Arc;

    fn provider(env: StaticEnv) -> HostingdeProvider {
        HostingdeProvider::with_env(Arc::new(env))
    }

    fn settings(config_file: Option<PathBuf>) -> Settings {
        Settings {
            config_file,
            log_level: Level::INFO,
        }
    }

    fn payload_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ValidateExitCode::Valid as u8, 0);
        assert_eq!(ValidateExitCode::ConfigError as u8, 1);
        assert_eq!(ValidateExitCode::RuntimeError as u8, 2);
    }

    #[test]
    fn test_run_valid_payload() {
        let file = payload_file(r#"{"account_id": "12345", "auth_token": "file-token"}"#);
        let settings = settings(Some(file.path().to_path_buf()));

        assert!(run(&settings, &provider(StaticEnv::new())).unwrap());
    }

    #[test]
    fn test_run_without_file_uses_environment() {
        let env = StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "env-token");

        assert!(run(&settings(None), &provider(env)).unwrap());
    }

    #[test]
    fn test_run_empty_payload_without_token_is_invalid() {
        let file = payload_file("{}");
        let settings = settings(Some(file.path().to_path_buf()));

        assert!(!run(&settings, &provider(StaticEnv::new())).unwrap());
    }

    #[test]
    fn test_run_missing_file_is_runtime_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(Some(dir.path().join("missing.json")));

        let err = run(&settings, &provider(StaticEnv::new())).unwrap_err();
        assert!(
            err.to_string()
                .contains("Failed to load provider configuration")
        );
    }

    #[test]
    fn test_run_malformed_file_is_runtime_error() {
        let file = payload_file("{ not json");
        let settings = settings(Some(file.path().to_path_buf()));

        assert!(run(&settings, &provider(StaticEnv::new())).is_err());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert!(parse_log_level("verbose").is_err());
    }
}
