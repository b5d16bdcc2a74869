//! OLX element tree.

/// An element in the output OLX tree.
///
/// Attributes keep insertion order. `text` is written verbatim as a CDATA
/// section and is never escaped or parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OlxNode {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<OlxNode>,
}

impl OlxNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_cdata(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: OlxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute, replacing the value in place if it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of element levels in this subtree, counting this node.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(OlxNode::depth).max().unwrap_or(0)
    }

    /// True when the element has neither text nor children.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_overwrites_in_place() {
        let mut node = OlxNode::new("video")
            .with_attr("a", "1")
            .with_attr("b", "2");
        node.set_attr("a", "3");
        assert_eq!(
            node.attributes,
            vec![("a".to_string(), "3".to_string()), ("b".to_string(), "2".to_string())]
        );
        assert_eq!(node.attr("a"), Some("3"));
        assert_eq!(node.attr("c"), None);
    }

    #[test]
    fn test_depth() {
        let leaf = OlxNode::new("html").with_cdata("<p/>");
        assert_eq!(leaf.depth(), 1);
        assert!(!leaf.is_empty());

        let tree = OlxNode::new("chapter")
            .with_child(OlxNode::new("sequential"))
            .with_child(OlxNode::new("sequential").with_child(OlxNode::new("vertical")));
        assert_eq!(tree.depth(), 3);
    }
}
