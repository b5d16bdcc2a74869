//! Link classification and static asset rewriting.
//!
//! Cartridge links are either plain hyperlinks or YouTube videos in
//! disguise. Embedded assets reference the package root through the
//! `$IMS-CC-FILEBASE$` placeholder, which OLX serves from `/static`.

use percent_encoding::percent_decode_str;

use super::patterns::{SRC_ATTR_RE, YOUTUBE_WATCH_RE};
use crate::model::ResolvedContent;

/// Substring marking a package-relative asset URL.
pub const FILEBASE_TOKEN: &str = "IMS-CC-FILEBASE";

/// The full placeholder as it appears once the URL is decoded.
const FILEBASE_PLACEHOLDER: &str = "$IMS-CC-FILEBASE$";

/// Server-relative path that replaces the placeholder.
pub const STATIC_PREFIX: &str = "/static";

/// Decide whether a link is a video, and normalize it.
///
/// Returns `Video` when the href is a YouTube watch URL (trailing query
/// parameters are ignored), otherwise `Html` holding an anchor tag.
///
/// ```
/// use cc2olx::model::ResolvedContent;
/// use cc2olx::olx::classify_link;
///
/// let video = classify_link("https://www.youtube.com/watch?v=ABC123&list=x", None);
/// assert_eq!(video, ResolvedContent::video("ABC123"));
///
/// let anchor = classify_link("https://example.com", Some("Example"));
/// assert_eq!(anchor, ResolvedContent::html("<a href='https://example.com'>Example</a>"));
/// ```
pub fn classify_link(href: &str, text: Option<&str>) -> ResolvedContent {
    if let Some(caps) = YOUTUBE_WATCH_RE.captures(href) {
        return ResolvedContent::video(&caps[1]);
    }

    ResolvedContent::html(format!("<a href='{}'>{}</a>", href, text.unwrap_or("")))
}

/// Rewrite placeholder asset URLs in `src="..."` attributes to `/static`.
///
/// Every matched value containing the placeholder is percent-decoded, the
/// placeholder is swapped for `/static`, and all occurrences of the
/// original encoded value in the text are replaced with the result.
/// Identical values are therefore rewritten together. HTML without the
/// placeholder is returned unchanged.
pub fn rewrite_static_links(html: &str) -> String {
    let mut result = html.to_string();

    for caps in SRC_ATTR_RE.captures_iter(html) {
        let src = &caps[1];
        if !src.contains(FILEBASE_TOKEN) {
            continue;
        }

        let decoded = percent_decode_str(src).decode_utf8_lossy();
        let new_src = decoded.replace(FILEBASE_PLACEHOLDER, STATIC_PREFIX);
        result = result.replace(src, &new_src);
    }

    result
}
