use super::output::{OutputFormat, print_entry, resolve_format};
use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, format: Option<OutputFormat>) {
    let rc = super::load_config(global);
    let dex = super::load_dex(&rc);

    match dex.random() {
        Ok(entry) => print_entry(entry, resolve_format(format)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
