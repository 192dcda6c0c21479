use crate::error::{ManifestError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CONFIG: &str = "config/asset-manifest";
pub const DEFAULT_OUTPUT: &str = "src/generated-assets.json";
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "gif"];

/// Path and ignore conventions for the `value` of image nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Assets under `public/`, values like `faces/hair/short.png`.
    #[default]
    Relative,
    /// Assets under `src/assets/`, values like `/src/assets/faces/hair/short.png`.
    Web,
}

impl Profile {
    pub fn assets_dir(&self) -> &'static str {
        match self {
            Profile::Relative => "public",
            Profile::Web => "src/assets",
        }
    }

    pub fn path_prefix(&self) -> &'static str {
        match self {
            Profile::Relative => "",
            Profile::Web => "/src/assets",
        }
    }

    pub fn ignore(&self) -> Vec<String> {
        let names: &[&str] = match self {
            Profile::Relative => &[
                ".DS_Store",
                "asset-manifest.json",
                "vite.svg",
                "templates",
                "sound",
            ],
            Profile::Web => &[".DS_Store"],
        };
        names.iter().map(|s| s.to_string()).collect()
    }
}

impl FromStr for Profile {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "relative" => Ok(Profile::Relative),
            "web" => Ok(Profile::Web),
            other => Err(ManifestError::UnknownProfile(other.to_string())),
        }
    }
}

// Goes through `FromStr` so config files and `--profile` accept the same spellings.
impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// On-disk configuration. Every key is optional; unset keys fall back to the
/// profile defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profile: Profile,
    pub project_root: Option<String>,
    pub assets_dir: Option<String>,
    pub output: Option<String>,
    pub path_prefix: Option<String>,
    pub ignore: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Exact entry names to skip.
    pub ignore: Vec<String>,
    /// Accepted file extensions, without the dot, matched case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            extensions: IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanOptions {
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|i| i == name)
    }
}

/// Fully resolved settings for one generator run.
#[derive(Debug, Clone)]
pub struct ManifestSettings {
    pub assets_dir: PathBuf,
    pub output: PathBuf,
    pub path_prefix: String,
    pub scan: ScanOptions,
}

impl AppConfig {
    pub fn settings(&self) -> ManifestSettings {
        let root = PathBuf::from(self.project_root.as_deref().unwrap_or("."));
        let assets_dir = self
            .assets_dir
            .as_deref()
            .unwrap_or_else(|| self.profile.assets_dir());
        let output = self.output.as_deref().unwrap_or(DEFAULT_OUTPUT);
        let path_prefix = self
            .path_prefix
            .clone()
            .unwrap_or_else(|| self.profile.path_prefix().to_string());
        let mut scan = ScanOptions {
            ignore: self.ignore.clone().unwrap_or_else(|| self.profile.ignore()),
            ..ScanOptions::default()
        };
        if let Some(exts) = &self.extensions {
            scan.extensions = exts
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect();
        }
        ManifestSettings {
            assets_dir: root.join(assets_dir),
            output: root.join(output),
            path_prefix,
            scan,
        }
    }
}

pub fn load(path: Option<&str>) -> Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name(DEFAULT_CONFIG).required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
