//! Build command implementation.

use std::io::Write;

use kegdex_core::dex::ProgressCallback;
use kegdex_core::keg;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, verbose: bool) {
    let rc = super::load_config(global);

    if !rc.keg_root.is_dir() {
        eprintln!("Error: keg root {} is not a directory", rc.keg_root.display());
        std::process::exit(1);
    }

    println!("Indexing keg: {}", rc.keg_root.display());

    let progress: ProgressCallback = if verbose {
        Box::new(|current, total, id| {
            println!("[{}/{}] {}", current, total, id);
        })
    } else {
        Box::new(|current, total, _id| {
            if current % 50 == 0 || current == total {
                print!("\rIndexing... {}/{}", current, total);
                std::io::stdout().flush().ok();
            }
        })
    };

    match keg::make_dex(&rc.keg_root, &rc.resolver(), Some(progress)) {
        Ok(stats) => {
            if !verbose && stats.nodes_found > 0 {
                println!();
            }
            println!();
            println!("Indexing complete:");
            println!("  Nodes found:    {}", stats.nodes_found);
            println!("  Nodes indexed:  {}", stats.nodes_indexed);
            if stats.untitled > 0 {
                println!("  Untitled:       {}", stats.untitled);
            }
            println!("  Duration:       {}ms", stats.duration_ms);
            println!();
            println!("Dex stored at: {}", rc.keg_root.join(keg::DEX_DIR).display());
        }
        Err(e) => {
            eprintln!("\nError during indexing: {}", e);
            std::process::exit(1);
        }
    }
}
