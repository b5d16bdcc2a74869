//! OLX tree construction.
//!
//! Turns a normalized outline into a tree of [`OlxNode`]s:
//!
//! - `mapper` walks the outline (chapter, sequential, vertical, leaf)
//! - `content` dispatches leaf content to a node builder
//! - `links` classifies links and rewrites static asset URLs
//! - `lti` builds `lti_consumer` elements
//!
//! Every builder returns fresh nodes; nothing holds a shared document.

mod content;
mod links;
mod lti;
mod mapper;
mod node;
mod patterns;

pub use content::{MISSING_CONTENT_HTML, OlxContent, QtiExporter, SkipQti, build_nodes};
pub use links::{FILEBASE_TOKEN, STATIC_PREFIX, classify_link, rewrite_static_links};
pub use lti::build_lti_node;
pub use mapper::{CONTAINER_TAGS, OutlineMapper};
pub use node::OlxNode;
