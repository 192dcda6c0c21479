use crate::config::ManifestSettings;
use crate::error::{ManifestError, Result};
use crate::models::{Category, Manifest, ManifestSummary};
use crate::scanner::{self, join_value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Scans every category under the assets directory. A category whose
/// path does not exist maps to an empty list; any other path is scanned and
/// fails if it is not a readable directory.
pub fn build_manifest(settings: &ManifestSettings) -> Result<Manifest> {
    let mut manifest = Manifest::default();
    for category in Category::ALL {
        let dir = settings.assets_dir.join(category.as_str());
        if !dir.exists() {
            debug!("No {} directory at {:?}", category.as_str(), dir);
            continue;
        }
        let prefix = join_value(&settings.path_prefix, category.as_str());
        let nodes = scanner::scan_directory(&dir, &prefix, &settings.scan)?;
        debug!("Scanned {} entries for {}", nodes.len(), category.as_str());
        manifest.set(category, nodes);
    }
    Ok(manifest)
}

/// Two-space indented JSON, no trailing newline.
pub fn render(manifest: &Manifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Overwrites `path`. The parent directory must already exist.
pub fn write_manifest(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn generate(settings: &ManifestSettings) -> Result<ManifestSummary> {
    let manifest = build_manifest(settings)?;
    let json = render(&manifest)?;
    write_manifest(&settings.output, &json)?;
    info!("Assets generated successfully: {}", settings.output.display());
    Ok(ManifestSummary::from_manifest(settings.output.clone(), &manifest))
}
