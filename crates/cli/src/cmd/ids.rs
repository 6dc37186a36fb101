//! Commands printing a single fact about the keg: `updated`, `first`, `last`
//! and `next`.

use kegdex_core::NodeId;
use kegdex_core::keg;

use crate::GlobalArgs;

pub fn updated(global: &GlobalArgs) {
    let rc = super::load_config(global);
    match keg::try_updated(&rc.keg_root) {
        Ok(t) => println!("{}", kegdex_core::timestamp::format_iso(&t)),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Hint: run 'kegdex build' first.");
            std::process::exit(1);
        }
    }
}

pub fn first(global: &GlobalArgs) {
    let rc = super::load_config(global);
    print_id(keg::first(&rc.keg_root), "no nodes");
}

pub fn last(global: &GlobalArgs) {
    let rc = super::load_config(global);
    print_id(keg::last(&rc.keg_root), "no nodes");
}

pub fn next(global: &GlobalArgs) {
    let rc = super::load_config(global);
    print_id(keg::next_id(&rc.keg_root), "keg root is not a directory");
}

fn print_id(id: Option<NodeId>, missing: &str) {
    match id {
        Some(id) => println!("{id}"),
        None => {
            eprintln!("Error: {missing}");
            std::process::exit(1);
        }
    }
}
