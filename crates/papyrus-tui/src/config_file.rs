use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api: Option<ApiConfig>,
    pub search: Option<SearchConfig>,
    pub suggest: Option<SuggestConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub limit: Option<usize>,
    /// Hybrid-ranking weight; opaque to the client, passed through unchanged.
    pub alpha: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestConfig {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

/// Platform config file path: `<config_dir>/papyrus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("papyrus").join("config.toml"))
}

/// Load config by cascading CWD `.papyrus.toml` over the platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".papyrus.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        api: Some(ApiConfig {
            base_url: overlay
                .api
                .as_ref()
                .and_then(|a| a.base_url.clone())
                .or_else(|| base.api.as_ref().and_then(|a| a.base_url.clone())),
        }),
        search: Some(SearchConfig {
            limit: overlay
                .search
                .as_ref()
                .and_then(|s| s.limit)
                .or_else(|| base.search.as_ref().and_then(|s| s.limit)),
            alpha: overlay
                .search
                .as_ref()
                .and_then(|s| s.alpha)
                .or_else(|| base.search.as_ref().and_then(|s| s.alpha)),
        }),
        suggest: Some(SuggestConfig {
            limit: overlay
                .suggest
                .as_ref()
                .and_then(|s| s.limit)
                .or_else(|| base.suggest.as_ref().and_then(|s| s.limit)),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlay_wins_per_field() {
        let base: ConfigFile = toml::from_str(
            r#"
            [api]
            base_url = "http://base/api"
            [search]
            limit = 10
            alpha = 0.5
        "#,
        )
        .unwrap();
        let overlay: ConfigFile = toml::from_str(
            r#"
            [search]
            limit = 25
        "#,
        )
        .unwrap();

        let merged = merge(base, overlay);
        assert_eq!(
            merged.api.as_ref().unwrap().base_url.as_deref(),
            Some("http://base/api")
        );
        assert_eq!(merged.search.as_ref().unwrap().limit, Some(25));
        assert_eq!(merged.search.as_ref().unwrap().alpha, Some(0.5));
    }

    #[test]
    fn partial_file_parses() {
        let cfg: ConfigFile = toml::from_str("[display]\ntheme = \"modern\"").unwrap();
        assert_eq!(cfg.display.unwrap().theme.as_deref(), Some("modern"));
        assert!(cfg.api.is_none());
    }
}
