//! Moving node directories into a keg.

use std::path::Path;

use kegdex_core::NodeId;
use kegdex_core::keg;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, dir: &Path, id: Option<NodeId>) {
    let rc = super::load_config(global);

    if !dir.is_dir() {
        eprintln!("Error: {} is not a directory", dir.display());
        std::process::exit(1);
    }

    let Some(id) = id.or_else(|| keg::next_id(&rc.keg_root)) else {
        eprintln!("Error: keg root {} is not a directory", rc.keg_root.display());
        std::process::exit(1);
    };

    match keg::import_node(dir, &rc.keg_root, id) {
        Ok(to) => println!("{}", to.display()),
        Err(e) => {
            eprintln!("Error importing node: {}", e);
            std::process::exit(1);
        }
    }
}

/// Create a scratch node outside any keg, ready for `import`.
pub fn draft() {
    match keg::make_temp_node() {
        Ok(doc) => println!("{}", doc.display()),
        Err(e) => {
            eprintln!("Error creating draft node: {}", e);
            std::process::exit(1);
        }
    }
}
