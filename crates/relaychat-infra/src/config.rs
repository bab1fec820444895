//! Relay configuration loader.
//!
//! Reads a `relaychat.toml` and deserializes it into [`RelayConfig`]. Falls
//! back to the built-in defaults (the historically observed deployment) when
//! the file is missing or malformed, so the relay always starts.

use std::path::Path;

use relaychat_types::config::RelayConfig;

/// Load relay configuration from `path`.
///
/// - If the file does not exist, returns [`RelayConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_relay_config(path: &Path) -> RelayConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            RelayConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relaychat_types::config::BackendKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_relay_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_relay_config(&tmp.path().join("relaychat.toml")).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.backend, BackendKind::Gradio);
    }

    #[tokio::test]
    async fn load_relay_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("relaychat.toml");
        tokio::fs::write(
            &config_path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[upstream]
backend = "openai"
endpoint = "https://api.openai.com"
model = "gpt-4o-mini"
"#,
        )
        .await
        .unwrap();

        let config = load_relay_config(&config_path).await;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.backend, BackendKind::OpenAi);
        assert_eq!(config.upstream.model, "gpt-4o-mini");
        // Unset sections keep their defaults
        assert_eq!(config.upstream.generation.temperature, 1.0);
    }

    #[tokio::test]
    async fn load_relay_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("relaychat.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_relay_config(&config_path).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.backend, BackendKind::Gradio);
    }
}
