//! Export module for writing cartridges as OLX.
//!
//! # Architecture
//!
//! `OlxExporter` uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `with_qti()` plugs in a QTI converter
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use cc2olx::JsonCartridge;
//! use cc2olx::export::OlxExporter;
//! use std::fs::File;
//!
//! let cartridge = JsonCartridge::open("course.json")?;
//! let mut file = File::create("course.xml")?;
//! OlxExporter::new().export(&cartridge, &mut file)?;
//! # Ok::<(), cc2olx::Error>(())
//! ```

use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::model::Cartridge;
use crate::olx::{OlxNode, OutlineMapper, QtiExporter, SkipQti};

mod document;

pub use document::OlxDocument;

/// Course-run identifier written when none is configured.
pub const DEFAULT_COURSE_RUN: &str = "Some_cc_Course";

/// Comment written at the top of every document.
pub const GENERATOR_COMMENT: &str = " Generated by cc2olx ";

/// Configuration for OLX export.
#[derive(Debug, Clone)]
pub struct OlxConfig {
    /// Value of the `course` attribute on the root element.
    pub course_run: String,
    /// Leading comment; `None` omits it.
    pub generator_comment: Option<String>,
    pub indent_char: u8,
    pub indent_size: usize,
}

impl Default for OlxConfig {
    fn default() -> Self {
        Self {
            course_run: DEFAULT_COURSE_RUN.to_string(),
            generator_comment: Some(GENERATOR_COMMENT.to_string()),
            indent_char: b'\t',
            indent_size: 1,
        }
    }
}

impl OlxConfig {
    pub fn with_course_run(mut self, course_run: impl Into<String>) -> Self {
        self.course_run = course_run.into();
        self
    }

    pub fn with_indent(mut self, indent_char: u8, indent_size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = indent_size;
        self
    }
}

/// OLX exporter.
///
/// Builds one `course` document per cartridge. QTI content is handed to
/// the configured [`QtiExporter`]; by default it is skipped.
pub struct OlxExporter<Q = SkipQti> {
    config: OlxConfig,
    qti: Q,
}

impl OlxExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: OlxConfig::default(),
            qti: SkipQti,
        }
    }
}

impl Default for OlxExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: QtiExporter> OlxExporter<Q> {
    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: OlxConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `qti` for assessment content.
    pub fn with_qti<R: QtiExporter>(self, qti: R) -> OlxExporter<R> {
        OlxExporter {
            config: self.config,
            qti,
        }
    }

    pub fn config(&self) -> &OlxConfig {
        &self.config
    }

    /// Build the document tree without serializing it.
    ///
    /// Fails on the first unsupported content type; no partial document
    /// is returned.
    pub fn build<C: Cartridge + ?Sized>(&self, cartridge: &C) -> Result<OlxDocument> {
        let mut course = OlxNode::new("course")
            .with_attr("org", cartridge.course_org())
            .with_attr("course", &self.config.course_run)
            .with_attr("name", cartridge.title());

        course.children = OutlineMapper::new(cartridge, &self.qti).map_course()?;

        info!(
            course = cartridge.title(),
            chapters = course.children.len(),
            "built OLX course"
        );

        Ok(OlxDocument {
            comment: self.config.generator_comment.clone(),
            root: course,
        })
    }

    /// Build and write the document to `writer`.
    pub fn export<C: Cartridge + ?Sized, W: Write>(&self, cartridge: &C, writer: W) -> Result<()> {
        let document = self.build(cartridge)?;
        document.write_to(writer, self.config.indent_char, self.config.indent_size)
    }

    /// Build and serialize the document to a string.
    pub fn to_xml_string<C: Cartridge + ?Sized>(&self, cartridge: &C) -> Result<String> {
        let document = self.build(cartridge)?;
        document.to_xml_string(self.config.indent_char, self.config.indent_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{JsonCartridge, OutlineNode};
    use serde_json::json;

    #[test]
    fn test_course_attributes() {
        let cartridge = JsonCartridge::new("MITx", "Physics");
        let document = OlxExporter::new().build(&cartridge).unwrap();

        assert_eq!(document.root.tag, "course");
        assert_eq!(document.root.attr("org"), Some("MITx"));
        assert_eq!(document.root.attr("course"), Some("Some_cc_Course"));
        assert_eq!(document.root.attr("name"), Some("Physics"));
        assert_eq!(document.comment.as_deref(), Some(" Generated by cc2olx "));
    }

    #[test]
    fn test_custom_course_run() {
        let cartridge = JsonCartridge::new("MITx", "Physics");
        let exporter = OlxExporter::new()
            .with_config(OlxConfig::default().with_course_run("2026_Fall"));

        let document = exporter.build(&cartridge).unwrap();
        assert_eq!(document.root.attr("course"), Some("2026_Fall"));
    }

    #[test]
    fn test_failed_build_writes_nothing() {
        let cartridge = JsonCartridge::new("org", "t")
            .with_chapter(OutlineNode::new().with_child(
                OutlineNode::new().with_child(OutlineNode::new().with_child(OutlineNode::leaf("x"))),
            ))
            .with_resource("x", json!({"type": "assignment"}));

        let mut out = Vec::new();
        let err = OlxExporter::new().export(&cartridge, &mut out).unwrap_err();

        assert!(matches!(err, Error::UnsupportedContentType(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_serialized_document() {
        let cartridge = JsonCartridge::new("org", "Course").with_chapter(
            OutlineNode::new().with_title("Week 1"),
        );
        let xml = OlxExporter::new()
            .with_config(OlxConfig::default().with_indent(b' ', 2))
            .to_xml_string(&cartridge)
            .unwrap();

        assert!(xml.contains("<!-- Generated by cc2olx -->"));
        assert!(xml.contains(r#"<course org="org" course="Some_cc_Course" name="Course">"#));
        assert!(xml.contains(r#"<chapter display_name="Week 1"/>"#));
    }
}
