//! The normalized cartridge contract.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{OutlineNode, ResolvedContent};
use crate::error::Result;

/// A Common Cartridge that has already been parsed and normalized.
///
/// Implemented by the normalization layer; the OLX exporter only reads it.
pub trait Cartridge {
    /// Organization identifier written to the `course` element.
    fn course_org(&self) -> &str;

    /// Course title written to the `course` element.
    fn title(&self) -> &str;

    /// Top-level outline nodes (chapters), in course order.
    fn outline(&self) -> &[OutlineNode];

    /// Resolve a resource identifier.
    ///
    /// `Ok(None)` means the identifier does not resolve; the exporter
    /// substitutes placeholder content for it.
    fn resolve_content(&self, identifier: &str) -> Result<Option<ResolvedContent>>;
}

/// A cartridge backed by a normalized JSON document.
///
/// ```json
/// {
///   "org": "edX",
///   "title": "Intro Course",
///   "normalized": {"children": [{"title": "Week 1", "children": []}]},
///   "resources": {"res1": {"type": "html", "html": "<p>Hi</p>"}}
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonCartridge {
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub normalized: OutlineNode,
    #[serde(default)]
    pub resources: HashMap<String, Value>,
}

impl JsonCartridge {
    pub fn new(org: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Append a top-level outline node.
    pub fn with_chapter(mut self, chapter: OutlineNode) -> Self {
        self.normalized = self.normalized.with_child(chapter);
        self
    }

    /// Register a resource in its tagged JSON form.
    pub fn with_resource(mut self, identifier: impl Into<String>, content: Value) -> Self {
        self.resources.insert(identifier.into(), content);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a normalized cartridge from a JSON file on disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl Cartridge for JsonCartridge {
    fn course_org(&self) -> &str {
        &self.org
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn outline(&self) -> &[OutlineNode] {
        self.normalized.children()
    }

    fn resolve_content(&self, identifier: &str) -> Result<Option<ResolvedContent>> {
        self.resources
            .get(identifier)
            .map(ResolvedContent::from_value)
            .transpose()
    }
}
