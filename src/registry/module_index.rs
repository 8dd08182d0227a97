use std::path::Path;

use super::discovery::CommandModule;
use super::error::Result;
use super::write_text;

/// One `pub mod` line per command module, newline terminated
pub fn render(modules: &[CommandModule]) -> String {
    let declarations: Vec<String> = modules.iter().map(CommandModule::declaration).collect();
    declarations.join("\n") + "\n"
}

/// Replace the module index with a fresh declaration list
pub fn write(path: &Path, modules: &[CommandModule]) -> Result<()> {
    write_text(path, &render(modules))?;
    log::info!("Wrote {} module declaration(s) to {}", modules.len(), path.display());
    Ok(())
}
