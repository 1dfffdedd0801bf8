//! Command-line argument parsing.
//!
//! `nuictx [MENUS_FILE] [MENU_ID]`

use std::path::PathBuf;

/// Menu file used when none is given.
const DEFAULT_MENUS: &str = "demos/menus.json";

/// What to show on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupArgs {
    /// JSON file with the menu definitions served by the host.
    pub menus: PathBuf,
    /// Menu opened first; defaults to the first menu in the file.
    pub menu_id: Option<String>,
}

/// Parse command-line arguments.
pub fn parse_args() -> StartupArgs {
    parse(std::env::args().skip(1))
}

fn parse(args: impl Iterator<Item = String>) -> StartupArgs {
    let mut args = args.filter(|arg| !arg.is_empty());

    let menus = args.next().map_or_else(|| PathBuf::from(DEFAULT_MENUS), PathBuf::from);
    let menu_id = args.next();

    if let Some(extra) = args.next() {
        tracing::warn!("ignoring extra argument: {extra}");
    }

    StartupArgs { menus, menu_id }
}
