//! Core library for kegdex.
//!
//! A keg is a directory of integer-named node directories, each holding a
//! `README.md`. This crate scans a keg into a [`dex::Dex`], answers queries
//! over it, persists the generated artifacts under `dex/`, and reads the
//! side tag index.

pub mod config;
pub mod dex;
pub mod frontmatter;
pub mod fsutil;
pub mod keg;
pub mod tags;
pub mod timestamp;
pub mod title;

pub use dex::{Chooser, Dex, DexError, Entry, NoChooser, NodeId};
pub use keg::KegError;
pub use tags::{TagError, TagIndex};
pub use title::{TitleError, TitleResolver};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
