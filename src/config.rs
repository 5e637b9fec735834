use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Site layout configuration, read from `sitegen.toml`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of Markdown documents.
    pub content: PathBuf,
    /// Directory of assets mirrored verbatim into the output.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,
    /// Output directory. Cleaned on every run.
    pub output: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Resolve every relative path against `root`.
    pub fn rooted(self, root: &Path) -> Self {
        Self {
            content: root.join(self.content),
            static_dir: root.join(self.static_dir),
            output: root.join(self.output),
            template: root.join(self.template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_keys() {
        let config: Config = toml::from_str("content = \"docs\"").unwrap();
        assert_eq!(config.content, PathBuf::from("docs"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.template, PathBuf::from("template.html"));
    }

    #[test]
    fn static_key_maps_to_static_dir() {
        let config: Config = toml::from_str("static = \"assets\"").unwrap();
        assert_eq!(config.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn rooted_leaves_absolute_paths_alone() {
        let config = Config {
            output: PathBuf::from("/tmp/out"),
            ..Config::default()
        };
        let rooted = config.rooted(Path::new("/site"));
        assert_eq!(rooted.output, PathBuf::from("/tmp/out"));
        assert_eq!(rooted.content, PathBuf::from("/site/content"));
    }
}
