use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

use super::error::ListError;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub list: ListConfig,
}

/// Paging defaults shared by all list screens
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size_options() -> Vec<usize> {
    vec![25, 50, 100, 200]
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[list]
page_size = 50
page_size_options = [25, 50, 100, 200]
"#;

static DEFAULT_LIST_CONFIG: Lazy<ListConfig> = Lazy::new(|| {
    parse_config(DEFAULT_CONFIG)
        .map(|config| config.list)
        .unwrap_or(ListConfig {
            page_size: 50,
            page_size_options: default_page_size_options(),
        })
});

impl ListConfig {
    pub fn validate(&self) -> Result<(), ListError> {
        if self.page_size == 0 {
            return Err(ListError::InvalidConfig("page_size must be at least 1".into()));
        }
        if self.page_size_options.is_empty() {
            return Err(ListError::InvalidConfig("page_size_options is empty".into()));
        }
        if self.page_size_options.contains(&0) {
            return Err(ListError::InvalidConfig(
                "page_size_options must not contain 0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        DEFAULT_LIST_CONFIG.clone()
    }
}

/// Parses and validates a TOML configuration
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.list.validate()?;
    Ok(config)
}

/// Load list configuration
///
/// Search order:
/// 1. `path`, when given and present
/// 2. Falls back to embedded default config
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ListConfig> {
    if let Some(path) = path {
        if path.exists() {
            log::info!("Loading list config from: {}", path.display());
            let contents = std::fs::read_to_string(path)?;
            return Ok(parse_config(&contents)?.list);
        }
        log::warn!("list config not found at: {}", path.display());
    }

    log::info!("Using default embedded list configuration");
    Ok(ListConfig::default())
}
