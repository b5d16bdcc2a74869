//! # cc2olx
//!
//! Convert normalized Common Cartridge course packages to OLX (Open Learning XML).
//!
//! ## Features
//!
//! - Maps the course outline to `chapter` / `sequential` / `vertical` containers
//! - Renders HTML, YouTube video, and LTI tool content as OLX leaf elements
//! - Detects YouTube links and rewrites `$IMS-CC-FILEBASE$` asset URLs to `/static`
//! - Pluggable QTI conversion through the [`QtiExporter`](olx::QtiExporter) trait
//!
//! ## Quick Start
//!
//! ```
//! use cc2olx::{JsonCartridge, OlxExporter, OutlineNode};
//! use serde_json::json;
//!
//! let cartridge = JsonCartridge::new("edX", "Intro Course")
//!     .with_chapter(
//!         OutlineNode::new().with_title("Week 1").with_child(
//!             OutlineNode::new().with_title("Lesson").with_child(
//!                 OutlineNode::new()
//!                     .with_title("Unit")
//!                     .with_child(OutlineNode::leaf("welcome").with_title("Welcome")),
//!             ),
//!         ),
//!     )
//!     .with_resource("welcome", json!({"type": "html", "html": "<p>Hello!</p>"}));
//!
//! let xml = OlxExporter::new().to_xml_string(&cartridge)?;
//! assert!(xml.contains("<![CDATA[<p>Hello!</p>]]>"));
//! # Ok::<(), cc2olx::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod olx;

pub use error::{Error, Result};
pub use export::{OlxConfig, OlxDocument, OlxExporter};
pub use model::{Cartridge, JsonCartridge, LtiDetails, OutlineNode, QtiDetails, ResolvedContent};
pub use olx::{OlxNode, QtiExporter};
