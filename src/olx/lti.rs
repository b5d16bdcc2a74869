use super::OlxNode;
use crate::model::LtiDetails;

/// Marks the element as a version-1 XBlock.
const XBLOCK_FAMILY: (&str, &str) = ("xblock-family", "xblock.v1");

/// Build an `lti_consumer` element.
///
/// Values are copied verbatim; escaping is left to serialization.
pub fn build_lti_node(details: &LtiDetails) -> OlxNode {
    OlxNode::new("lti_consumer")
        .with_attr(
            "custom_parameters",
            format_custom_parameters(&details.custom_parameters),
        )
        .with_attr("description", &details.description)
        .with_attr("display_name", &details.title)
        .with_attr("inline_height", &details.height)
        .with_attr("inline_width", &details.width)
        .with_attr("launch_url", &details.launch_url)
        .with_attr("modal_height", &details.height)
        .with_attr("modal_width", &details.width)
        .with_attr(XBLOCK_FAMILY.0, XBLOCK_FAMILY.1)
}

/// `["a=1", "b=2"]`
fn format_custom_parameters(params: &[(String, String)]) -> String {
    let entries: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("\"{}={}\"", key, value))
        .collect();
    format!("[{}]", entries.join(", "))
}
