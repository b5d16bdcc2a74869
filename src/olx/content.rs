//! Content dispatch and leaf node construction.

use tracing::warn;

use super::links::{classify_link, rewrite_static_links};
use super::lti::build_lti_node;
use super::OlxNode;
use crate::error::{Error, Result};
use crate::model::{LtiDetails, QtiDetails, ResolvedContent};

/// Placeholder body for leaves whose content is missing.
pub const MISSING_CONTENT_HTML: &str = "<p>MISSING CONTENT</p>";

/// Content kinds that produce OLX leaf nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum OlxContent {
    Html(String),
    Video(String),
    Lti(LtiDetails),
    Qti(QtiDetails),
}

impl OlxContent {
    pub fn missing() -> Self {
        OlxContent::Html(MISSING_CONTENT_HTML.to_string())
    }
}

impl TryFrom<ResolvedContent> for OlxContent {
    type Error = Error;

    /// Links are classified into html or video; anything outside the
    /// supported set is rejected.
    fn try_from(content: ResolvedContent) -> Result<Self> {
        let content = match content {
            ResolvedContent::Link { href, text } => classify_link(&href, text.as_deref()),
            other => other,
        };

        match content {
            ResolvedContent::Html { html } => Ok(OlxContent::Html(html)),
            ResolvedContent::Video { youtube } => Ok(OlxContent::Video(youtube)),
            ResolvedContent::Lti(details) => Ok(OlxContent::Lti(details)),
            ResolvedContent::Qti(details) => Ok(OlxContent::Qti(details)),
            other => Err(Error::UnsupportedContentType(
                other.content_type().to_string(),
            )),
        }
    }
}

/// Converts QTI assessment details into OLX problem nodes.
///
/// Implementations may return any number of nodes; they are attached
/// unchanged as siblings.
pub trait QtiExporter {
    fn create_qti_nodes(&self, details: &QtiDetails) -> Result<Vec<OlxNode>>;
}

/// A `QtiExporter` that drops assessments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipQti;

impl QtiExporter for SkipQti {
    fn create_qti_nodes(&self, _details: &QtiDetails) -> Result<Vec<OlxNode>> {
        warn!("no QTI exporter configured, skipping assessment content");
        Ok(Vec::new())
    }
}

/// Build the leaf nodes for one piece of content.
pub fn build_nodes<Q: QtiExporter + ?Sized>(content: &OlxContent, qti: &Q) -> Result<Vec<OlxNode>> {
    match content {
        OlxContent::Html(html) => Ok(vec![build_html_node(html)]),
        OlxContent::Video(youtube) => Ok(vec![build_video_node(youtube)]),
        OlxContent::Lti(details) => Ok(vec![build_lti_node(details)]),
        OlxContent::Qti(details) => qti.create_qti_nodes(details),
    }
}

fn build_html_node(html: &str) -> OlxNode {
    OlxNode::new("html").with_cdata(rewrite_static_links(html))
}

/// The `youtube` attribute maps playback speed 1.0 to the id.
fn build_video_node(youtube: &str) -> OlxNode {
    OlxNode::new("video")
        .with_attr("youtube", format!("1.00:{}", youtube))
        .with_attr("youtube_id_1_0", youtube)
}
