//! Walks a category directory and turns it into a tree of asset nodes.

use crate::config::ScanOptions;
use crate::error::{ManifestError, Result};
use crate::label::{format_label, node_id};
use crate::models::AssetNode;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Component, Path};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

struct OpenFolder {
    id: String,
    label: String,
    children: Vec<AssetNode>,
}

/// Scans `dir` depth-first. Image `value`s are `prefix` joined with the
/// entry's path below `dir`, always `/`-separated.
///
/// Entries keep the order the filesystem hands them out in. Any directory
/// that cannot be read aborts the whole scan.
pub fn scan_directory(dir: &Path, prefix: &str, options: &ScanOptions) -> Result<Vec<AssetNode>> {
    let images = build_globset(&options.extensions)?;

    // WalkDir yields nothing below min_depth for a file root.
    if let Ok(meta) = fs::metadata(dir) {
        if !meta.is_dir() {
            return Err(ManifestError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
    }

    // stack[0] is `dir` itself; an entry at depth d belongs to stack[d - 1].
    let mut stack = vec![OpenFolder {
        id: String::new(),
        label: String::new(),
        children: Vec::new(),
    }];

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| should_descend(e, options));

    for entry in walker {
        let entry = entry.map_err(|source| ManifestError::ReadDir {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            source,
        })?;

        while stack.len() > entry.depth() {
            close_folder(&mut stack);
        }

        let name = entry.file_name().to_string_lossy();
        let id = node_id(&name).to_string();
        let label = format_label(&id);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            stack.push(OpenFolder {
                id,
                label,
                children: Vec::new(),
            });
        } else if file_type.is_file() {
            if !images.is_match(entry.file_name()) {
                debug!("Skipping non-image {:?}", entry.path());
                continue;
            }
            let value = join_value(prefix, &relative_value(dir, entry.path()));
            if let Some(parent) = stack.last_mut() {
                parent.children.push(AssetNode::Image { id, label, value });
            }
        } else {
            debug!("Skipping {:?}: not a regular file or directory", entry.path());
        }
    }

    while stack.len() > 1 {
        close_folder(&mut stack);
    }
    Ok(stack.pop().map(|root| root.children).unwrap_or_default())
}

/// Joins two logical path pieces with a single `/`.
pub fn join_value(prefix: &str, rest: &str) -> String {
    if prefix.is_empty() {
        rest.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{rest}")
    } else {
        format!("{prefix}/{rest}")
    }
}

fn close_folder(stack: &mut Vec<OpenFolder>) {
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(AssetNode::Folder {
                id: done.id,
                label: done.label,
                children: done.children,
            });
        }
    }
}

fn should_descend(entry: &DirEntry, options: &ScanOptions) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if options.is_ignored(&name) {
        debug!("Ignoring {:?}", entry.path());
        return false;
    }
    true
}

fn relative_value(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn build_globset(extensions: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        let glob = GlobBuilder::new(&format!("*.{ext}"))
            .case_insensitive(true)
            .build()?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
