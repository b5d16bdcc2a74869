//! Cached regex patterns for link handling.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Matches YouTube watch URLs and captures the video id.
///
/// Unanchored so exported hrefs with doubled query separators still match,
/// e.g. `https://www.youtube.com/watch?v=gQ-cZRmHfs4&amp;amp;list=PL5B`.
pub static YOUTUBE_WATCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube.com/watch\?v=([-\w]+)").unwrap());

/// Matches src="..." attribute values
pub static SRC_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src\s*=\s*"(.+?)""#).unwrap());
