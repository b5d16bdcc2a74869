//! Resolved content descriptors.
//!
//! A resolver hands back one of these for every leaf `identifierref`. The
//! JSON form is tagged by a `type` field with the details alongside it:
//!
//! ```json
//! {"type": "link", "href": "https://example.com", "text": "Example"}
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// Content returned by a cartridge for one resource.
///
/// `Link` is transient: it is always classified into `Html` or `Video`
/// before any OLX node is built. `Other` carries a type name outside the
/// supported set so the dispatcher can name it in its error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedContent {
    Html { html: String },
    Link { href: String, text: Option<String> },
    Video { youtube: String },
    Lti(LtiDetails),
    Qti(QtiDetails),
    Other { content_type: String },
}

impl ResolvedContent {
    pub const HTML: &'static str = "html";
    pub const LINK: &'static str = "link";
    pub const VIDEO: &'static str = "video";
    pub const LTI: &'static str = "lti";
    pub const QTI: &'static str = "qti";

    pub fn html(html: impl Into<String>) -> Self {
        ResolvedContent::Html { html: html.into() }
    }

    pub fn link(href: impl Into<String>, text: Option<&str>) -> Self {
        ResolvedContent::Link {
            href: href.into(),
            text: text.map(str::to_string),
        }
    }

    pub fn video(youtube: impl Into<String>) -> Self {
        ResolvedContent::Video {
            youtube: youtube.into(),
        }
    }

    /// The type name as it appears in the tagged JSON form.
    pub fn content_type(&self) -> &str {
        match self {
            ResolvedContent::Html { .. } => Self::HTML,
            ResolvedContent::Link { .. } => Self::LINK,
            ResolvedContent::Video { .. } => Self::VIDEO,
            ResolvedContent::Lti(_) => Self::LTI,
            ResolvedContent::Qti(_) => Self::QTI,
            ResolvedContent::Other { content_type } => content_type,
        }
    }

    /// Decode the tagged JSON form.
    ///
    /// An unknown `type` is not an error here; it becomes `Other` and is
    /// rejected later, when the content is dispatched.
    pub fn from_value(value: &Value) -> Result<Self> {
        let content_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_details("resource", "missing \"type\" field"))?;

        let invalid = |e: serde_json::Error| Error::invalid_details(content_type, e.to_string());

        match content_type {
            Self::HTML => {
                let details = HtmlDetails::deserialize(value).map_err(invalid)?;
                Ok(ResolvedContent::Html { html: details.html })
            }
            Self::LINK => {
                let details = LinkDetails::deserialize(value).map_err(invalid)?;
                Ok(ResolvedContent::Link {
                    href: details.href,
                    text: details.text,
                })
            }
            Self::VIDEO => {
                let details = VideoDetails::deserialize(value).map_err(invalid)?;
                Ok(ResolvedContent::Video {
                    youtube: details.youtube,
                })
            }
            Self::LTI => Ok(ResolvedContent::Lti(
                LtiDetails::deserialize(value).map_err(invalid)?,
            )),
            Self::QTI => Ok(ResolvedContent::Qti(QtiDetails(value.clone()))),
            other => Ok(ResolvedContent::Other {
                content_type: other.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
struct HtmlDetails {
    html: String,
}

#[derive(Deserialize)]
struct LinkDetails {
    href: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct VideoDetails {
    youtube: String,
}

/// Details of an LTI tool launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LtiDetails {
    pub title: String,
    pub description: String,
    pub launch_url: String,
    #[serde(deserialize_with = "lossy_string")]
    pub height: String,
    #[serde(deserialize_with = "lossy_string")]
    pub width: String,
    /// Key/value pairs in document order.
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub custom_parameters: Vec<(String, String)>,
}

impl LtiDetails {
    pub fn new(title: impl Into<String>, launch_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            launch_url: launch_url.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn with_custom_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_parameters.push((key.into(), value.into()));
        self
    }
}

/// QTI assessment details, passed through untouched to a `QtiExporter`.
#[derive(Debug, Clone, PartialEq)]
pub struct QtiDetails(pub Value);

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accept strings or numbers (`"400"` and `400` both read as "400").
fn lossy_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

fn ordered_pairs<'de, D>(deserializer: D) -> std::result::Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
    Ok(map
        .iter()
        .map(|(key, value)| (key.clone(), value_to_string(value)))
        .collect())
}
