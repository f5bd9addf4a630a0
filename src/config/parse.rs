//! Configuration file parsing
//!
//! A run.yml file holds up to two YAML documents: the first is the task
//! mapping (name -> shell string or nested list), the optional second is the
//! run options mapping. Contiguous `# ` comment lines immediately preceding
//! a top-level key become that task's description.

use crate::config::types::{Options, RawBody, RawTask};
use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "run.yml";

/// Name of the synthetic root task
pub const ROOT_TASK_NAME: &str = "run";

/// Default description of the synthetic root task
const ROOT_TASK_DESC: &str = "General run description";

/// Loaded configuration: the root task descriptor plus run options
#[derive(Debug, Clone)]
pub struct Config {
    /// Synthetic root descriptor whose children are the top-level keys
    pub root: RawTask,

    /// Options from the second YAML document
    pub options: Options,
}

/// Load and parse a configuration file from a path
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("failed to read file: {}", e)))?;
    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(contents: &str) -> ConfigResult<Config> {
    let mut documents = serde_yaml::Deserializer::from_str(contents);

    // Task mapping document
    let first = documents
        .next()
        .ok_or_else(|| ConfigError::Invalid("empty configuration".to_string()))?;
    let mapping = Mapping::deserialize(first)
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;

    // Options document
    let options = match documents.next() {
        Some(document) => {
            let value = Value::deserialize(document)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
            if value.is_null() {
                Options::default()
            } else {
                serde_yaml::from_value(value)
                    .map_err(|e| ConfigError::Invalid(e.to_string()))?
            }
        }
        None => Options::default(),
    };

    let descriptions = harvest_descriptions(contents, &mapping);

    // Top-level keys become children of the synthetic root
    let mut childs = Vec::new();
    for (key, value) in &mapping {
        let name = key
            .as_str()
            .ok_or_else(|| ConfigError::Invalid("task names must be strings".to_string()))?
            .to_string();
        let desc = descriptions.get(&name).cloned().unwrap_or_default();
        childs.push(RawTask {
            name,
            desc,
            body: body_from_value(value)?,
        });
    }

    let root = RawTask {
        name: ROOT_TASK_NAME.to_string(),
        desc: ROOT_TASK_DESC.to_string(),
        body: RawBody::Group(childs),
    };

    Ok(Config { root, options })
}

/// Harvest per-key descriptions from contiguous leading comment lines
fn harvest_descriptions(contents: &str, mapping: &Mapping) -> HashMap<String, String> {
    let keys: Vec<&str> = mapping.keys().filter_map(Value::as_str).collect();

    let mut descriptions = HashMap::new();
    let mut comments: Vec<&str> = Vec::new();
    for line in contents.lines() {
        if let Some(text) = line.strip_prefix("# ") {
            comments.push(text);
            continue;
        }
        for key in &keys {
            if line.starts_with(key) && !comments.is_empty() {
                descriptions.insert(key.to_string(), comments.join("\n"));
            }
        }
        comments.clear();
    }
    descriptions
}

/// Convert a YAML value into a raw task body
fn body_from_value(value: &Value) -> ConfigResult<RawBody> {
    match value {
        Value::String(code) => Ok(RawBody::Code(code.clone())),
        Value::Number(number) => Ok(RawBody::Code(number.to_string())),
        Value::Bool(flag) => Ok(RawBody::Code(flag.to_string())),
        Value::Sequence(items) => {
            let mut childs = Vec::new();
            for item in items {
                childs.push(entry_from_value(item)?);
            }
            Ok(RawBody::Group(childs))
        }
        other => Err(ConfigError::Invalid(format!(
            "unsupported task body: {:?}",
            other
        ))),
    }
}

/// Convert a group element into a raw task descriptor
///
/// Single-key mappings are named sub-tasks; anything else is wrapped as an
/// anonymous leaf or group.
fn entry_from_value(value: &Value) -> ConfigResult<RawTask> {
    match value {
        Value::Mapping(map) => {
            let mut entries = map.iter();
            match (entries.next(), entries.next()) {
                (Some((key, body)), None) => {
                    let name = key.as_str().ok_or_else(|| {
                        ConfigError::Invalid("task names must be strings".to_string())
                    })?;
                    Ok(RawTask::new(name, body_from_value(body)?))
                }
                _ => Err(ConfigError::Invalid(
                    "sub-task descriptors must have exactly one key".to_string(),
                )),
            }
        }
        other => Ok(RawTask::new("", body_from_value(other)?)),
    }
}
