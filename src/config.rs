use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FileNames,
}

/// Well-known file names the host recognises inside a project.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FileNames {
    #[serde(default = "default_settings_filename")]
    pub settings_filename: String,
    #[serde(default = "default_karma_config_filename")]
    pub karma_config_filename: String,
}
fn default_settings_filename() -> String { "KarmaTestAdapter.json".to_string() }
fn default_karma_config_filename() -> String { "karma.conf.js".to_string() }

impl Default for FileNames {
    fn default() -> Self {
        Self {
            settings_filename: default_settings_filename(),
            karma_config_filename: default_karma_config_filename(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        check_file_name("settings_filename", &self.files.settings_filename)?;
        check_file_name("karma_config_filename", &self.files.karma_config_filename)?;
        Ok(())
    }
}

fn check_file_name(key: &str, value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    if value.contains('/') || value.contains(std::path::MAIN_SEPARATOR) {
        anyhow::bail!("{key} must be a bare file name, got: {value}");
    }
    Ok(())
}
