//! Front matter splitting and title metadata.
//!
//! Only the title keys are modelled; every other key in the block is
//! tolerated and ignored.

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, parse, parse_meta, split};
pub use types::{ParsedDocument, TitleMeta};
