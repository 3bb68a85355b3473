use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use lumilab_core::config::{AppConfig, LoadOptions, LogFormat};
use toml::Value;

use super::{CommandResult, EXIT_INVALID};

struct Field {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_INVALID,
            )
        }
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in fields(&config) {
        let source =
            field_source(&field, config_file_doc.as_ref(), config_file_path.as_deref());
        lines.push(format!("- {} = {} (source: {source})", field.key_path, field.value));
    }

    CommandResult::text(lines.join("\n"))
}

fn field(key_path: &'static str, env_keys: &'static [&'static str], value: String) -> Field {
    Field { key_path, env_keys, value }
}

fn fields(config: &AppConfig) -> Vec<Field> {
    vec![
        field(
            "server.bind_address",
            &["LUMILAB_SERVER_BIND_ADDRESS"],
            config.server.bind_address.clone(),
        ),
        field("server.port", &["LUMILAB_SERVER_PORT"], config.server.port.to_string()),
        field(
            "server.graceful_shutdown_secs",
            &["LUMILAB_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            config.server.graceful_shutdown_secs.to_string(),
        ),
        field("site.brand_name", &["LUMILAB_SITE_BRAND_NAME"], config.site.brand_name.clone()),
        field(
            "site.mode",
            &["LUMILAB_SITE_MODE"],
            if config.site.mode.is_demo() { "demo" } else { "personal" }.to_string(),
        ),
        field(
            "site.templates_dir",
            &["LUMILAB_SITE_TEMPLATES_DIR"],
            config.site.templates_dir.display().to_string(),
        ),
        field(
            "site.assets_dir",
            &["LUMILAB_SITE_ASSETS_DIR"],
            config.site.assets_dir.display().to_string(),
        ),
        field(
            "site.kit_price_usd",
            &["LUMILAB_SITE_KIT_PRICE_USD"],
            config.site.kit_price_usd.to_string(),
        ),
        field(
            "logging.level",
            &["LUMILAB_LOGGING_LEVEL", "LUMILAB_LOG_LEVEL"],
            config.logging.level.clone(),
        ),
        field(
            "logging.format",
            &["LUMILAB_LOGGING_FORMAT", "LUMILAB_LOG_FORMAT"],
            log_format_name(config.logging.format).to_string(),
        ),
    ]
}

fn log_format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("lumilab.toml"), PathBuf::from("config/lumilab.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let raw = fs::read_to_string(path?).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    field: &Field,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    let set_env = field
        .env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = set_env {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, field.key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}
