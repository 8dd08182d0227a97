use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::error::Result;
use super::{read_text, write_text};

lazy_static! {
    // `.` stops at line breaks, so the list must sit on a single line
    static ref COMMANDS_LIST: Regex =
        Regex::new(r"commands: vec!\[.*?\]").expect("commands list pattern is valid");
}

/// The registration list literal for the given command references
pub fn commands_list(references: &[String]) -> String {
    format!("commands: vec![{}]", references.join(", "))
}

/// Swap the first `commands: vec![...]` span for a freshly generated one.
///
/// Returns the patched text and whether a span was found. Without a span the
/// text comes back unchanged.
pub fn patch(content: &str, references: &[String]) -> (String, bool) {
    match COMMANDS_LIST.find(content) {
        Some(span) => {
            let mut patched = String::with_capacity(content.len());
            patched.push_str(&content[..span.start()]);
            patched.push_str(&commands_list(references));
            patched.push_str(&content[span.end()..]);
            (patched, true)
        }
        None => (content.to_owned(), false),
    }
}

/// Patch the entry file in place. The file is rewritten even when no span matched.
pub fn update(path: &Path, references: &[String]) -> Result<bool> {
    let content = read_text(path)?;
    let (patched, found) = patch(&content, references);

    if found {
        log::info!(
            "Registered {} command(s) in {}",
            references.len(),
            path.display()
        );
    } else {
        log::warn!(
            "No `commands: vec![...]` list in {}, leaving it unchanged",
            path.display()
        );
    }

    write_text(path, &patched)?;
    Ok(found)
}
