use serde::{Deserialize, Serialize};

/// One level of the normalized course hierarchy.
///
/// The same shape is used at every depth (course, chapter, sequential,
/// vertical, leaf). Container levels are driven by `children`, leaves by
/// `identifierref`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifierref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<OutlineNode>>,
}

impl OutlineNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaf node pointing at a resource.
    pub fn leaf(identifierref: impl Into<String>) -> Self {
        Self {
            identifierref: Some(identifierref.into()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Children in input order; absent children read as empty.
    pub fn children(&self) -> &[OutlineNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}
