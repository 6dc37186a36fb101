pub mod build;
pub mod doctor;
pub mod ids;
pub mod import;
pub mod list;
pub mod output;
pub mod random;
pub mod search;
pub mod tags;

use kegdex_core::Dex;
use kegdex_core::config::loader::ConfigLoader;
use kegdex_core::config::types::ResolvedConfig;
use kegdex_core::keg;

use crate::{GlobalArgs, logging};

/// Resolve the active keg and start logging, exiting on a bad config.
pub fn load_config(global: &GlobalArgs) -> ResolvedConfig {
    let rc = match resolve(global) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            eprintln!("Hint: run 'kegdex doctor' or pass --keg-dir <path>.");
            std::process::exit(1);
        }
    };
    logging::init(&rc.logging);
    rc
}

pub fn resolve(
    global: &GlobalArgs,
) -> Result<ResolvedConfig, kegdex_core::config::loader::ConfigError> {
    match global.keg_dir {
        Some(ref dir) => Ok(ResolvedConfig::for_keg_dir(dir)),
        None => ConfigLoader::load(global.config.as_deref(), global.keg.as_deref()),
    }
}

/// The dex for the active keg, building it first when missing.
pub fn load_dex(rc: &ResolvedConfig) -> Dex {
    if !rc.keg_root.is_dir() {
        tracing::warn!("keg root {} is not a directory", rc.keg_root.display());
        return Dex::new();
    }
    if !keg::have_dex(&rc.keg_root) {
        tracing::info!("no dex in {}, building", rc.keg_root.display());
        if let Err(e) = keg::make_dex(&rc.keg_root, &rc.resolver(), None) {
            eprintln!("Error building dex: {}", e);
            std::process::exit(1);
        }
    }
    match keg::read_dex(&rc.keg_root) {
        Ok(dex) => dex,
        Err(e) => {
            eprintln!("Error reading dex: {}", e);
            eprintln!("Hint: run 'kegdex build' to regenerate it.");
            std::process::exit(1);
        }
    }
}
