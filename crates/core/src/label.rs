//! Display labels and ids derived from asset file names.

/// Turns `my_folder-name` into `My Folder Name`.
///
/// Only the first character of each segment is touched; the rest keeps its
/// original casing.
pub fn format_label(name: &str) -> String {
    name.split(['-', '_'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything before the first `.`, so `foo.bar.png` becomes `foo`.
pub fn node_id(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
