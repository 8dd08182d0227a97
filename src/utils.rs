use std::env;
use std::path::{Path, PathBuf};

/// Name of the module index inside the commands directory
pub const MODULE_INDEX_FILE: &str = "mod.rs";

/// Where the bot sources live and which files get regenerated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotPaths {
    pub commands_dir: PathBuf,
    pub module_index: PathBuf,
    pub entry_file: PathBuf,
}

impl BotPaths {
    /// Lay out the paths under a bot `src` directory
    pub fn new(bot_src: impl AsRef<Path>) -> Self {
        let bot_src = bot_src.as_ref();
        let commands_dir = bot_src.join("commands");

        Self {
            module_index: commands_dir.join(MODULE_INDEX_FILE),
            commands_dir,
            entry_file: bot_src.join("main.rs"),
        }
    }

    /// Resolve from `BOT_SRC_DIR`, falling back to `bot/src` next to this crate
    pub fn from_env() -> Self {
        Self::new(get_bot_src_dir())
    }
}

/// Get the bot source directory to operate on
pub fn get_bot_src_dir() -> PathBuf {
    env::var("BOT_SRC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_bot_src_dir()) // Default to the checked-in layout
}

fn default_bot_src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("bot").join("src")
}
