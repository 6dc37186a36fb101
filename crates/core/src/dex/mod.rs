//! The dex: an ordered index of a keg's nodes.
//!
//! - [`types`]: [`Entry`] and [`Dex`]
//! - [`query`]: lookup, sorting, search, selection and mutation
//! - [`render`]: JSON, TSV, Markdown, include and terminal views
//! - [`builder`]: building a dex from a keg directory
//! - [`chooser`]: the interactive selection seam

pub mod builder;
pub mod chooser;
pub mod query;
pub mod render;
pub mod types;

pub use builder::{BuildError, BuildStats, DexBuilder, ProgressCallback};
pub use chooser::{Chooser, NoChooser};
pub use types::{Dex, DexError, Entry, NodeId};
