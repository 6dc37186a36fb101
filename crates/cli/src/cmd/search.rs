//! Title search commands: `titles`, `grep` and `choose`.

use kegdex_core::Dex;
use regex::{Regex, RegexBuilder};

use super::output::{OutputFormat, print_dex, resolve_format};
use crate::GlobalArgs;
use crate::chooser::FuzzyChooser;

pub fn titles(global: &GlobalArgs, keyword: &str, format: Option<OutputFormat>) {
    let rc = super::load_config(global);
    let mut dex = super::load_dex(&rc);
    let hits = dex.with_title_text(keyword);
    print_hits(&hits, format);
}

pub fn grep(global: &GlobalArgs, pattern: &str, ignore_case: bool, format: Option<OutputFormat>) {
    let re = compile(pattern, ignore_case);
    let rc = super::load_config(global);
    let mut dex = super::load_dex(&rc);
    let hits = dex.with_title_text_exp(&re);
    print_hits(&hits, format);
}

pub fn choose(global: &GlobalArgs, query: &str, regex: bool) {
    let rc = super::load_config(global);
    let mut dex = super::load_dex(&rc);
    let chooser = FuzzyChooser::new("Select node");

    let chosen = if regex {
        dex.choose_with_title_text_exp(&compile(query, false), &chooser)
    } else {
        dex.choose_with_title_text(query, &chooser)
    };

    match chosen {
        Some(entry) => println!("{}", entry.id()),
        None => {
            eprintln!("No node chosen for {query:?}");
            std::process::exit(1);
        }
    }
}

fn compile(pattern: &str, ignore_case: bool) -> Regex {
    match RegexBuilder::new(pattern).case_insensitive(ignore_case).build() {
        Ok(re) => re,
        Err(e) => {
            eprintln!("Invalid pattern: {}", e);
            std::process::exit(2);
        }
    }
}

fn print_hits(hits: &Dex, format: Option<OutputFormat>) {
    if hits.is_empty() {
        eprintln!("(no matching nodes)");
        std::process::exit(1);
    }
    print_dex(hits, resolve_format(format));
}
