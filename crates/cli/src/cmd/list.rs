//! List command implementation.

use super::output::{print_dex, resolve_format};
use crate::{GlobalArgs, ListArgs};

pub fn run(global: &GlobalArgs, args: ListArgs) {
    let rc = super::load_config(global);
    let mut dex = super::load_dex(&rc);

    if args.by_id {
        dex.by_id();
    }

    print_dex(&dex, resolve_format(args.format));
}
