use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::error::{Error, Result};
use super::read_text;
use crate::utils::MODULE_INDEX_FILE;

lazy_static! {
    static ref COMMAND_FN: Regex =
        Regex::new(r"pub async fn (\w+)").expect("command fn pattern is valid");
}

/// A command source file and the command functions it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandModule {
    pub name: String,
    pub functions: Vec<String>,
}

impl CommandModule {
    /// The line declaring this module in the module index
    pub fn declaration(&self) -> String {
        format!("pub mod {};", self.name)
    }

    /// `module::function()` for every command function, in declaration order
    pub fn references(&self) -> impl Iterator<Item = String> + '_ {
        self.functions
            .iter()
            .map(move |function| format!("{}::{}()", self.name, function))
    }
}

/// Module identifier for a command file: everything before the first `.`
pub fn module_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Names of all `pub async fn` declarations in `source`, in text order
pub fn command_functions(source: &str) -> Vec<String> {
    COMMAND_FN
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_owned())
        .collect()
}

/// Scan the commands directory in iteration order, skipping the module index
pub fn discover(commands_dir: &Path) -> Result<Vec<CommandModule>> {
    let read_dir_error = |source: io::Error| Error::ReadDir {
        path: commands_dir.to_path_buf(),
        source,
    };

    let mut modules = Vec::new();
    for entry in fs::read_dir(commands_dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_name = entry
            .file_name()
            .into_string()
            .map_err(|_| Error::InvalidFileName { path: entry.path() })?;

        if file_name == MODULE_INDEX_FILE {
            continue;
        }

        let name = module_name(&file_name).to_owned();
        let functions = command_functions(&read_text(&entry.path())?);
        log::debug!(
            "Found {} command(s) in {}: {:?}",
            functions.len(),
            file_name,
            functions
        );

        modules.push(CommandModule { name, functions });
    }

    Ok(modules)
}

/// Every command reference across all modules, in discovery order
pub fn references(modules: &[CommandModule]) -> Vec<String> {
    modules.iter().flat_map(|module| module.references()).collect()
}
