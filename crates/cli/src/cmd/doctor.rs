use kegdex_core::config::loader::default_config_path;
use kegdex_core::keg;

use crate::{GlobalArgs, logging};

pub fn run(global: &GlobalArgs) {
    match super::resolve(global) {
        Ok(rc) => {
            logging::init(&rc.logging);
            println!("OK   kegdex doctor");
            match (&global.keg_dir, &global.config) {
                (Some(_), _) => println!("path: (none, --keg-dir)"),
                (None, Some(p)) => println!("path: {}", p.display()),
                (None, None) => println!("path: {}", default_config_path().display()),
            }
            println!("keg: {}", rc.active_keg);
            println!("keg_root: {}", rc.keg_root.display());
            for (name, path) in &rc.kegs {
                println!("kegs.{name}: {}", path.display());
            }
            println!("title.max_heading_len: {}", rc.title.max_heading_len);
            println!("logging.level: {}", rc.logging.level);
            if !rc.keg_root.is_dir() {
                println!("WARN keg_root is not a directory");
            }
            if keg::have_dex(&rc.keg_root) {
                println!("dex: present");
                println!("updated: {}", keg::updated_string(&rc.keg_root));
            } else {
                println!("dex: missing (run 'kegdex build')");
            }
        }
        Err(e) => {
            println!("FAIL kegdex doctor");
            println!("{e}");
            if global.config.is_none() && global.keg_dir.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
