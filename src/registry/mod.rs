// Command registry - regenerates commands/mod.rs and the list in main.rs
pub mod discovery;
pub mod entry_file;
pub mod error;
pub mod module_index;

use std::fs;
use std::path::Path;

pub use discovery::CommandModule;
pub use error::{Error, Result};

use crate::utils::BotPaths;

/// Outcome of a regeneration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub modules: Vec<CommandModule>,
    pub references: Vec<String>,
    pub entry_patched: bool,
}

/// Rebuild the module index and the entry file's command list from the commands directory
pub fn update(paths: &BotPaths) -> Result<Generation> {
    let modules = discovery::discover(&paths.commands_dir)?;
    let references = discovery::references(&modules);

    module_index::write(&paths.module_index, &modules)?;
    let entry_patched = entry_file::update(&paths.entry_file, &references)?;

    Ok(Generation {
        modules,
        references,
        entry_patched,
    })
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
