use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Faces,
    Clothes,
    Etc,
}

impl Category {
    /// Manifest order.
    pub const ALL: [Category; 3] = [Category::Faces, Category::Clothes, Category::Etc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Faces => "faces",
            Category::Clothes => "clothes",
            Category::Etc => "etc",
        }
    }
}

/// A folder or image entry in the generated tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetNode {
    Folder {
        id: String,
        label: String,
        children: Vec<AssetNode>,
    },
    Image {
        id: String,
        label: String,
        value: String,
    },
}

impl AssetNode {
    pub fn id(&self) -> &str {
        match self {
            AssetNode::Folder { id, .. } | AssetNode::Image { id, .. } => id.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AssetNode::Folder { label, .. } | AssetNode::Image { label, .. } => label.as_str(),
        }
    }

    /// Number of image leaves at or below this node.
    pub fn image_count(&self) -> usize {
        match self {
            AssetNode::Folder { children, .. } => children.iter().map(Self::image_count).sum(),
            AssetNode::Image { .. } => 1,
        }
    }

    /// Number of folders at or below this node, itself included.
    pub fn folder_count(&self) -> usize {
        match self {
            AssetNode::Folder { children, .. } => {
                1 + children.iter().map(Self::folder_count).sum::<usize>()
            }
            AssetNode::Image { .. } => 0,
        }
    }
}

// `type` goes between `label` and the payload.
impl Serialize for AssetNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AssetNode", 4)?;
        match self {
            AssetNode::Folder {
                id,
                label,
                children,
            } => {
                state.serialize_field("id", id)?;
                state.serialize_field("label", label)?;
                state.serialize_field("type", "folder")?;
                state.serialize_field("children", children)?;
            }
            AssetNode::Image { id, label, value } => {
                state.serialize_field("id", id)?;
                state.serialize_field("label", label)?;
                state.serialize_field("type", "image")?;
                state.serialize_field("value", value)?;
            }
        }
        state.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub faces: Vec<AssetNode>,
    pub clothes: Vec<AssetNode>,
    pub etc: Vec<AssetNode>,
}

impl Manifest {
    pub fn set(&mut self, category: Category, nodes: Vec<AssetNode>) {
        match category {
            Category::Faces => self.faces = nodes,
            Category::Clothes => self.clothes = nodes,
            Category::Etc => self.etc = nodes,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub images: usize,
    pub folders: usize,
}

impl CategoryStats {
    pub fn of(nodes: &[AssetNode]) -> Self {
        Self {
            images: nodes.iter().map(AssetNode::image_count).sum(),
            folders: nodes.iter().map(AssetNode::folder_count).sum(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ManifestSummary {
    pub output: PathBuf,
    pub faces: CategoryStats,
    pub clothes: CategoryStats,
    pub etc: CategoryStats,
}

impl ManifestSummary {
    pub fn from_manifest(output: PathBuf, manifest: &Manifest) -> Self {
        Self {
            output,
            faces: CategoryStats::of(&manifest.faces),
            clothes: CategoryStats::of(&manifest.clothes),
            etc: CategoryStats::of(&manifest.etc),
        }
    }

    pub fn total_images(&self) -> usize {
        self.faces.images + self.clothes.images + self.etc.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, value: &str) -> AssetNode {
        AssetNode::Image {
            id: id.to_string(),
            label: id.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn image_serializes_with_type_after_label() {
        let json = serde_json::to_string(&image("red", "clothes/red.svg")).unwrap();
        assert_eq!(
            json,
            r#"{"id":"red","label":"red","type":"image","value":"clothes/red.svg"}"#
        );
    }

    #[test]
    fn folder_parses_back_from_tagged_json() {
        let json = r#"{"id":"shirt","label":"Shirt","type":"folder","children":[]}"#;
        let node: AssetNode = serde_json::from_str(json).unwrap();
        assert_eq!(
            node,
            AssetNode::Folder {
                id: "shirt".into(),
                label: "Shirt".into(),
                children: vec![],
            }
        );
    }

    #[test]
    fn counts_walk_nested_folders() {
        let tree = AssetNode::Folder {
            id: "a".into(),
            label: "A".into(),
            children: vec![
                image("x", "x.png"),
                AssetNode::Folder {
                    id: "b".into(),
                    label: "B".into(),
                    children: vec![image("y", "y.png")],
                },
            ],
        };
        assert_eq!(tree.image_count(), 2);
        assert_eq!(tree.folder_count(), 2);
    }

    #[test]
    fn empty_manifest_keeps_all_keys_in_order() {
        let json = serde_json::to_string(&Manifest::default()).unwrap();
        assert_eq!(json, r#"{"faces":[],"clothes":[],"etc":[]}"#);
    }
}
