use kegdex_core::keg;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, names: &str) {
    let rc = super::load_config(global);

    match keg::grep_tags(&rc.keg_root, names) {
        Ok(lines) if lines.is_empty() => std::process::exit(1),
        Ok(lines) => println!("{lines}"),
        Err(e) => {
            eprintln!("Error reading tags: {}", e);
            std::process::exit(1);
        }
    }
}
