//! Resolution of the VM name and tool path for one program instance

use crate::config::schema::{
    ConfigDocument, ConfigSource, Entries, ResolvedConfig, SectionValue, TOOL_PATH_FIELD,
    VM_NAME_FIELD,
};
use log::debug;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a configuration could not be resolved
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file '{}' not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Configuration file '{}' could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("The '{key}' section is missing in the configuration file.")]
    SectionMissing { key: String },

    #[error("The '{key}' section in the configuration file is not an object.")]
    SectionNotObject { key: String },

    #[error("The '{field}' key is missing in the '{key}' section.")]
    FieldMissing { key: String, field: &'static str },

    #[error("The '{field}' key in the '{key}' section {reason}.")]
    FieldInvalid {
        key: String,
        field: &'static str,
        reason: String,
    },
}

/// Resolve the settings for `lookup_key`.
///
/// Without a config path the generic built-in pair is returned and nothing is read.
pub fn resolve(lookup_key: &str, config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    match config_path {
        Some(path) => resolve_file(lookup_key, path),
        None => Ok(ResolvedConfig::default()),
    }
}

impl ConfigSource {
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        match self {
            ConfigSource::Fixed(config) => Ok(config.clone()),
            ConfigSource::File { path, lookup_key } => resolve_file(lookup_key, path),
        }
    }
}

/// Read `path` and extract the `lookup_key` section
pub fn resolve_file(lookup_key: &str, path: &Path) -> Result<ResolvedConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!("loaded {} bytes from {}", text.len(), path.display());
    // Notepad saves UTF-8 with a byte order mark
    let json = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let document: ConfigDocument = serde_json::from_str(json)?;
    section_config(&document, lookup_key)
}

fn section_config(document: &ConfigDocument, key: &str) -> Result<ResolvedConfig, ConfigError> {
    let section = match document.first(key) {
        Some(SectionValue::Object(entries)) => entries,
        Some(SectionValue::Other(_)) => {
            return Err(ConfigError::SectionNotObject { key: key.to_string() })
        }
        None => return Err(ConfigError::SectionMissing { key: key.to_string() }),
    };

    let vm_name = required_string(section, key, VM_NAME_FIELD)?;
    let tool_path = required_string(section, key, TOOL_PATH_FIELD)?;
    Ok(ResolvedConfig { vm_name, tool_path })
}

fn required_string(
    section: &Entries<Value>,
    key: &str,
    field: &'static str,
) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::FieldInvalid {
        key: key.to_string(),
        field,
        reason,
    };

    match section.first(field) {
        None | Some(Value::Null) => Err(ConfigError::FieldMissing {
            key: key.to_string(),
            field,
        }),
        Some(Value::String(s)) if s.is_empty() => Err(invalid("is empty".to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(invalid(format!("must be a string, found {}", json_kind(other)))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
