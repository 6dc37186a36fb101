//! Keg directory operations: node discovery and the generated `dex/` artifacts.

pub mod scan;
pub mod store;

pub use store::{
    DEX_DIR, KEG_FILE, KegError, NODES_JSON, NODES_MD, TAGS_FILE, first, grep_tags, have_dex,
    import_node, last, make_dex, make_temp_node, next_id, read_dex, read_tags, scan_dex,
    try_updated, update_updated, updated, updated_string, write_dex,
};
