use recruitify_compiler_html::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_NAME: &str = "recruitify.config.json";

/// Recruitify configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one JSON file per template
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Directory for unsaved drafts
    #[serde(default = "default_drafts_dir")]
    pub drafts_dir: String,

    /// Quiet period before a draft is written
    #[serde(default = "default_autosave_debounce_ms")]
    pub autosave_debounce_ms: u64,

    /// Static HTML output options
    #[serde(default)]
    pub html: HtmlConfig,
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_drafts_dir() -> String {
    ".recruitify/drafts".to_string()
}

fn default_autosave_debounce_ms() -> u64 {
    600
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn default_pretty() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
            title: None,
        }
    }
}

impl HtmlConfig {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            pretty: self.pretty,
            indent: " ".repeat(self.indent),
            title: self.title.clone(),
            ..CompileOptions::default()
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn templates_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.templates_dir)
    }

    pub fn drafts_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.drafts_dir)
    }

    pub fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            drafts_dir: default_drafts_dir(),
            autosave_debounce_ms: default_autosave_debounce_ms(),
            html: HtmlConfig::default(),
        }
    }
}
