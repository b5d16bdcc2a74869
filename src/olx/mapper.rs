//! Outline to OLX tree mapping.
//!
//! Walks the normalized outline depth-first. Each container level consumes
//! one tag from the remaining tag list; once the list is empty the nodes
//! are leaves and are resolved into content.

use tracing::{debug, warn};

use super::OlxNode;
use super::content::{OlxContent, QtiExporter, build_nodes};
use crate::error::Result;
use crate::model::{Cartridge, OutlineNode};

/// Container element for each outline level below the course.
pub const CONTAINER_TAGS: [&str; 3] = ["chapter", "sequential", "vertical"];

const DISPLAY_NAME: &str = "display_name";

/// Maps outline nodes of one cartridge to OLX nodes.
pub struct OutlineMapper<'a, C: ?Sized, Q: ?Sized> {
    cartridge: &'a C,
    qti: &'a Q,
}

impl<'a, C, Q> OutlineMapper<'a, C, Q>
where
    C: Cartridge + ?Sized,
    Q: QtiExporter + ?Sized,
{
    pub fn new(cartridge: &'a C, qti: &'a Q) -> Self {
        Self { cartridge, qti }
    }

    /// Map the whole course outline into chapter elements.
    pub fn map_course(&self) -> Result<Vec<OlxNode>> {
        self.map(self.cartridge.outline(), &CONTAINER_TAGS)
    }

    /// Map `nodes` at the depth described by the remaining `tags`.
    ///
    /// With tags left, each node becomes one container element. With no
    /// tags left, each node is resolved and may yield any number of leaf
    /// elements; children at that depth are mapped again as leaves and
    /// attached under every produced element.
    pub fn map(&self, nodes: &[OutlineNode], tags: &[&str]) -> Result<Vec<OlxNode>> {
        let mut mapped = Vec::with_capacity(nodes.len());

        match tags.split_first() {
            Some((tag, rest)) => {
                for node in nodes {
                    let mut container = OlxNode::new(*tag);
                    apply_display_name(&mut container, node);
                    container.children = self.map(node.children(), rest)?;
                    debug!(
                        tag = *tag,
                        title = node.title.as_deref().unwrap_or(""),
                        children = container.children.len(),
                        "mapped container"
                    );
                    mapped.push(container);
                }
            }
            None => {
                for node in nodes {
                    let content = self.resolve(node)?;
                    let mut produced = build_nodes(&content, self.qti)?;

                    for olx in &mut produced {
                        apply_display_name(olx, node);
                        if let Some(children) = &node.children {
                            olx.children.extend(self.map(children, &[])?);
                        }
                    }

                    debug!(count = produced.len(), "mapped leaf content");
                    mapped.extend(produced);
                }
            }
        }

        Ok(mapped)
    }

    /// Resolve a leaf into content.
    ///
    /// A missing or unresolvable `identifierref` yields placeholder HTML.
    pub fn resolve(&self, node: &OutlineNode) -> Result<OlxContent> {
        let resolved = match &node.identifierref {
            Some(identifier) => self.cartridge.resolve_content(identifier)?,
            None => None,
        };

        match resolved {
            Some(content) => OlxContent::try_from(content),
            None => {
                warn!(
                    identifierref = node.identifierref.as_deref().unwrap_or(""),
                    title = node.title.as_deref().unwrap_or(""),
                    "missing content, using placeholder"
                );
                Ok(OlxContent::missing())
            }
        }
    }
}

fn apply_display_name(olx: &mut OlxNode, node: &OutlineNode) {
    if let Some(title) = &node.title {
        olx.set_attr(DISPLAY_NAME, title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{JsonCartridge, QtiDetails};
    use crate::olx::SkipQti;
    use serde_json::json;

    /// Two `problem` nodes per assessment, each with one existing child.
    struct PairQti;

    impl QtiExporter for PairQti {
        fn create_qti_nodes(&self, _details: &QtiDetails) -> Result<Vec<OlxNode>> {
            Ok(vec![
                OlxNode::new("problem").with_child(OlxNode::new("choiceresponse")),
                OlxNode::new("problem").with_child(OlxNode::new("choiceresponse")),
            ])
        }
    }

    fn three_level(leaf: OutlineNode) -> JsonCartridge {
        JsonCartridge::new("org", "Course").with_chapter(
            OutlineNode::new().with_title("Chapter 1").with_child(
                OutlineNode::new()
                    .with_title("Sequential 1")
                    .with_child(OutlineNode::new().with_title("Vertical 1").with_child(leaf)),
            ),
        )
    }

    #[test]
    fn test_nested_levels_with_display_names() {
        let cartridge = three_level(OutlineNode::leaf("r1").with_title("Intro"))
            .with_resource("r1", json!({"type": "html", "html": "<p>Hello</p>"}));

        let chapters = OutlineMapper::new(&cartridge, &SkipQti).map_course().unwrap();

        assert_eq!(chapters.len(), 1);
        let chapter = &chapters[0];
        assert_eq!(chapter.depth(), 4);
        assert_eq!(chapter.tag, "chapter");
        assert_eq!(chapter.attr("display_name"), Some("Chapter 1"));

        let sequential = &chapter.children[0];
        assert_eq!(sequential.tag, "sequential");
        assert_eq!(sequential.attr("display_name"), Some("Sequential 1"));

        let vertical = &sequential.children[0];
        assert_eq!(vertical.tag, "vertical");
        assert_eq!(vertical.attr("display_name"), Some("Vertical 1"));

        let html = &vertical.children[0];
        assert_eq!(html.tag, "html");
        assert_eq!(html.attr("display_name"), Some("Intro"));
        assert_eq!(html.text.as_deref(), Some("<p>Hello</p>"));
    }

    #[test]
    fn test_untitled_containers_have_no_display_name() {
        let cartridge = JsonCartridge::new("org", "Course")
            .with_chapter(OutlineNode::new())
            .with_chapter(OutlineNode::new().with_title("Titled"));

        let chapters = OutlineMapper::new(&cartridge, &SkipQti).map_course().unwrap();

        assert_eq!(chapters.len(), 2);
        assert!(chapters[0].attributes.is_empty());
        assert!(chapters[0].children.is_empty());
        assert_eq!(chapters[1].attr("display_name"), Some("Titled"));
    }

    #[test]
    fn test_missing_identifierref_yields_placeholder() {
        let cartridge = three_level(OutlineNode::new().with_title("Nothing here"));
        let chapters = OutlineMapper::new(&cartridge, &SkipQti).map_course().unwrap();

        let leaf = &chapters[0].children[0].children[0].children[0];
        assert_eq!(leaf.tag, "html");
        assert_eq!(leaf.text.as_deref(), Some("<p>MISSING CONTENT</p>"));
        assert_eq!(leaf.attr("display_name"), Some("Nothing here"));
    }

    #[test]
    fn test_unresolvable_identifierref_yields_placeholder() {
        let cartridge = three_level(OutlineNode::leaf("nowhere"));
        let chapters = OutlineMapper::new(&cartridge, &SkipQti).map_course().unwrap();

        let leaf = &chapters[0].children[0].children[0].children[0];
        assert_eq!(leaf.text.as_deref(), Some("<p>MISSING CONTENT</p>"));
    }

    #[test]
    fn test_unsupported_type_aborts() {
        let cartridge = three_level(OutlineNode::leaf("r1"))
            .with_resource("r1", json!({"type": "discussion", "text": "x"}));

        let err = OutlineMapper::new(&cartridge, &SkipQti)
            .map_course()
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedContentType(t) if t == "discussion"));
    }

    #[test]
    fn test_children_keep_input_order() {
        let vertical = OutlineNode::new()
            .with_child(OutlineNode::leaf("b").with_title("B"))
            .with_child(OutlineNode::leaf("a").with_title("A"))
            .with_child(OutlineNode::leaf("c").with_title("C"));
        let cartridge = JsonCartridge::new("org", "Course")
            .with_chapter(OutlineNode::new().with_child(OutlineNode::new().with_child(vertical)))
            .with_resource("a", json!({"type": "html", "html": "a"}))
            .with_resource("b", json!({"type": "video", "youtube": "b"}))
            .with_resource("c", json!({"type": "link", "href": "https://c.example"}));

        let chapters = OutlineMapper::new(&cartridge, &SkipQti).map_course().unwrap();
        let leaves = &chapters[0].children[0].children[0].children;

        let names: Vec<_> = leaves.iter().map(|n| n.attr("display_name").unwrap()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        let tags: Vec<_> = leaves.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["video", "html", "html"]);
    }

    #[test]
    fn test_qti_leaf_expands_to_siblings() {
        let cartridge = three_level(OutlineNode::leaf("quiz").with_title("Quiz"))
            .with_resource("quiz", json!({"type": "qti", "items": []}));

        let chapters = OutlineMapper::new(&cartridge, &PairQti).map_course().unwrap();
        let leaves = &chapters[0].children[0].children[0].children;

        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().all(|n| n.tag == "problem"));
        assert!(leaves.iter().all(|n| n.attr("display_name") == Some("Quiz")));
    }

    #[test]
    fn test_composite_leaf_children_attach_to_every_node() {
        let leaf = OutlineNode::leaf("quiz")
            .with_child(OutlineNode::leaf("part").with_title("Part"));
        let cartridge = three_level(leaf)
            .with_resource("quiz", json!({"type": "qti"}))
            .with_resource("part", json!({"type": "html", "html": "<p>part</p>"}));

        let chapters = OutlineMapper::new(&cartridge, &PairQti).map_course().unwrap();
        let leaves = &chapters[0].children[0].children[0].children;

        assert_eq!(leaves.len(), 2);
        for problem in leaves {
            let tags: Vec<_> = problem.children.iter().map(|n| n.tag.as_str()).collect();
            assert_eq!(tags, vec!["choiceresponse", "html"]);
            assert_eq!(problem.children[1].attr("display_name"), Some("Part"));
        }
    }

    #[test]
    fn test_map_with_custom_tags() {
        let cartridge = JsonCartridge::new("org", "Course");
        let mapper = OutlineMapper::new(&cartridge, &SkipQti);
        let nodes = [OutlineNode::new().with_title("Only").with_child(OutlineNode::new())];

        let mapped = mapper.map(&nodes, &["vertical"]).unwrap();

        assert_eq!(mapped[0].tag, "vertical");
        assert_eq!(mapped[0].children[0].tag, "html");
    }
}
