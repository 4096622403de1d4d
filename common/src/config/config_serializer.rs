use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML via `serde_yaml_ng`. Parse errors name the offending line and column
/// so a hand-edited engine config can be fixed without guessing.
#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }

    fn describe_error(err: &serde_yaml_ng::Error) -> String {
        match err.location() {
            Some(location) => format!(
                "line {}, column {}: {}",
                location.line(),
                location.column(),
                err
            ),
            None => err.to_string(),
        }
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to write engine config as YAML: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Engine config file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| {
            format!("Failed to read engine config at {}", Self::describe_error(&e))
        })
    }
}
