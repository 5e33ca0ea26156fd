//! CLI configuration: thin wrapper around `eventdesk_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--server, --timeout, --insecure, --page-size).

use std::time::Duration;

use eventdesk_core::{ClientConfig, TlsVerification};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use eventdesk_config::{
    Config, ConfigError, config_path, load_config, profile_to_client_config, save_config,
};

/// Translate the active profile + global flags into a `ClientConfig`.
///
/// Flag overrides take priority over profile values, which take priority
/// over `[defaults]`.
pub fn resolve_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let (_, mut profile) = cfg
        .profile(global.profile.as_deref())
        .map_err(|e| match e {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: available_profiles(cfg),
            },
            other => CliError::Config(other),
        })?;

    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if let Some(page_size) = global.page_size {
        profile.page_size = Some(page_size);
    }

    let mut client = profile_to_client_config(&profile, &cfg.defaults)?;
    if global.insecure {
        client.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        client.timeout = Duration::from_secs(secs);
    }
    Ok(client)
}

/// Output format: flag, then `defaults.output`, then html.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global
        .output
        .unwrap_or_else(|| match cfg.defaults.output.as_str() {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Html,
        })
}

/// Color mode: flag, then `defaults.color`, then auto.
pub fn color_mode(global: &GlobalOpts, cfg: &Config) -> ColorMode {
    global
        .color
        .unwrap_or_else(|| match cfg.defaults.color.as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        })
}

pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
