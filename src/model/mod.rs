//! Input data model for OLX conversion.
//!
//! This module contains:
//! - Outline nodes (the normalized course hierarchy)
//! - Resolved content descriptors (html, link, video, lti, qti)
//! - The `Cartridge` contract implemented by the normalization layer
//! - A JSON-backed cartridge used by the CLI and tests

mod cartridge;
mod content;
mod outline;

pub use cartridge::{Cartridge, JsonCartridge};
pub use content::{LtiDetails, QtiDetails, ResolvedContent};
pub use outline::OutlineNode;
