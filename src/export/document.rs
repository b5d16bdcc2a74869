//! OLX document serialization.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::olx::OlxNode;

/// A complete OLX document: generator comment plus the `course` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OlxDocument {
    pub comment: Option<String>,
    pub root: OlxNode,
}

impl OlxDocument {
    pub fn new(root: OlxNode) -> Self {
        Self {
            comment: None,
            root,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Write the pretty-printed document.
    pub fn write_to<W: Write>(&self, writer: W, indent_char: u8, indent_size: usize) -> Result<()> {
        let mut xml = Writer::new_with_indent(writer, indent_char, indent_size);

        xml.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        if let Some(ref comment) = self.comment {
            xml.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?;
        }
        write_node(&mut xml, &self.root)?;
        xml.get_mut().write_all(b"\n")?;

        Ok(())
    }

    pub fn to_xml_string(&self, indent_char: u8, indent_size: usize) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, indent_char, indent_size)?;
        Ok(String::from_utf8(buf)?)
    }
}

fn write_node<W: Write>(xml: &mut Writer<W>, node: &OlxNode) -> Result<()> {
    let mut start = BytesStart::new(node.tag.as_str());
    for (name, value) in &node.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if let Some(ref text) = node.text {
        xml.write_event(Event::CData(BytesCData::new(escape_cdata(text))))?;
    }
    for child in &node.children {
        write_node(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;

    Ok(())
}

/// Split any `]]>` terminator across two adjacent CDATA sections.
///
/// The result is written between `<![CDATA[` and `]]>` and reads back as
/// the original text.
fn escape_cdata(text: &str) -> String {
    text.replace("]]>", "]]]]><![CDATA[>")
}
