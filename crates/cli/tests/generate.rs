use manifest_core::config::{AppConfig, Profile};
use manifest_core::models::{AssetNode, Manifest};
use manifest_core::pipeline;
use manifest_core::ManifestError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"img").unwrap();
}

fn config_for(root: &Path, profile: Profile) -> AppConfig {
    AppConfig {
        profile,
        project_root: Some(root.to_string_lossy().into_owned()),
        ..AppConfig::default()
    }
}

fn read_manifest(path: &Path) -> Manifest {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_category_becomes_empty_list() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("public/faces/eyes/round.png"));
    touch(&temp.path().join("public/clothes/hat.gif"));
    fs::create_dir_all(temp.path().join("src")).unwrap();

    let settings = config_for(temp.path(), Profile::Relative).settings();
    let summary = pipeline::generate(&settings).unwrap();

    let manifest = read_manifest(&settings.output);
    assert!(manifest.etc.is_empty());
    assert_eq!(manifest.clothes.len(), 1);
    assert_eq!(summary.total_images(), 2);
    assert_eq!(summary.faces.folders, 1);

    let AssetNode::Folder { children, label, .. } = &manifest.faces[0] else {
        panic!("expected eyes folder");
    };
    assert_eq!(label, "Eyes");
    assert_eq!(
        children[0],
        AssetNode::Image {
            id: "round".into(),
            label: "Round".into(),
            value: "faces/eyes/round.png".into(),
        }
    );
}

#[test]
fn output_is_two_space_indented() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();

    let settings = config_for(temp.path(), Profile::Relative).settings();
    pipeline::generate(&settings).unwrap();

    let text = fs::read_to_string(&settings.output).unwrap();
    assert_eq!(text, "{\n  \"faces\": [],\n  \"clothes\": [],\n  \"etc\": []\n}");
}

#[test]
fn rerun_is_byte_identical() {
    let temp = tempdir().unwrap();
    for name in ["a.png", "b.png", "c.svg", "nested/d.jpg", "nested/deeper/e.gif"] {
        touch(&temp.path().join("public/etc").join(name));
    }
    fs::create_dir_all(temp.path().join("public/faces/empty")).unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();

    let settings = config_for(temp.path(), Profile::Relative).settings();
    pipeline::generate(&settings).unwrap();
    let first = fs::read(&settings.output).unwrap();
    pipeline::generate(&settings).unwrap();
    let second = fs::read(&settings.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn overwrites_existing_output() {
    let temp = tempdir().unwrap();
    let settings = config_for(temp.path(), Profile::Relative).settings();
    touch(&settings.output);
    fs::write(&settings.output, "stale content that is longer than the manifest").unwrap();

    pipeline::generate(&settings).unwrap();
    assert_eq!(read_manifest(&settings.output), Manifest::default());
}

#[test]
fn web_profile_emits_absolute_paths() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("src/assets/faces/hair/short.png"));

    let settings = config_for(temp.path(), Profile::Web).settings();
    pipeline::generate(&settings).unwrap();

    let manifest = read_manifest(&settings.output);
    let AssetNode::Folder { children, .. } = &manifest.faces[0] else {
        panic!("expected hair folder");
    };
    assert_eq!(
        children[0],
        AssetNode::Image {
            id: "short".into(),
            label: "Short".into(),
            value: "/src/assets/faces/hair/short.png".into(),
        }
    );
}

#[test]
fn relative_profile_skips_its_ignore_list() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("public/etc/sound/beep.png"));
    touch(&temp.path().join("public/etc/templates/base.png"));
    touch(&temp.path().join("public/etc/vite.svg"));
    touch(&temp.path().join("public/etc/star.svg"));
    fs::create_dir_all(temp.path().join("src")).unwrap();

    let relative = config_for(temp.path(), Profile::Relative).settings();
    let manifest = pipeline::build_manifest(&relative).unwrap();
    let ids: Vec<&str> = manifest.etc.iter().map(AssetNode::id).collect();
    assert_eq!(ids, vec!["star"]);

    let web = AppConfig {
        assets_dir: Some("public".to_string()),
        ..config_for(temp.path(), Profile::Web)
    }
    .settings();
    let manifest = pipeline::build_manifest(&web).unwrap();
    let mut ids: Vec<&str> = manifest.etc.iter().map(AssetNode::id).collect();
    ids.sort();
    assert_eq!(ids, vec!["sound", "star", "templates", "vite"]);
}

#[test]
fn category_that_is_a_file_fails_the_build() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("public/faces"));
    touch(&temp.path().join("public/clothes/hat.png"));
    fs::create_dir_all(temp.path().join("src")).unwrap();

    let settings = config_for(temp.path(), Profile::Relative).settings();
    let err = pipeline::generate(&settings).unwrap_err();
    assert!(matches!(err, ManifestError::NotADirectory { .. }));
    assert!(!settings.output.exists());
}

#[test]
fn unwritable_output_is_an_error() {
    let temp = tempdir().unwrap();
    let settings = AppConfig {
        output: Some("missing/dir/assets.json".to_string()),
        ..config_for(temp.path(), Profile::Relative)
    }
    .settings();

    let err = pipeline::generate(&settings).unwrap_err();
    assert!(matches!(err, ManifestError::Write { .. }));
    assert!(!settings.output.exists());
}
