//! # chatclip Library
//!
//! This crate can be used to:
//!
//! - Serialize a single file into a labeled, fenced code block
//! - Serialize a whole directory tree, filtered by ignore substrings
//! - Place the result on the system clipboard for pasting into a chat assistant
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chatclip::clipboard::SystemClipboard;
//! use chatclip::run_copy_directory;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = std::env::current_dir()?;
//!     let mut clipboard = SystemClipboard::new();
//!     run_copy_directory(
//!         &root.join("src"),
//!         &root,
//!         &["node_modules".to_string()],
//!         &mut clipboard,
//!     )
//!     .await
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod prompt;
pub mod serializer;
pub mod utils;
pub mod walker;

pub use cli::{Action, Config};
pub use clipboard::{Clipboard, SystemClipboard};
pub use serializer::{directory_header, serialize_file};
pub use walker::collect_files;

use anyhow::Result;
use log::{debug, error};
use std::path::Path;

/// Dispatches a parsed command to the matching operation.
pub async fn run_chatclip(config: Config, clipboard: &mut impl Clipboard) -> Result<()> {
    match &config.action {
        Action::CopyFile(path) => run_copy_file(path, &config.project_root, clipboard).await,
        Action::CopyDirectory(path) => {
            run_copy_directory(path, &config.project_root, &config.ignore_patterns, clipboard)
                .await
        }
        Action::CopyPrompt => run_copy_prompt(&prompt::template_path(), clipboard).await,
    }
}

/// Copies one file's serialized block to the clipboard.
///
/// Read failures propagate; nothing is written to the clipboard on error.
pub async fn run_copy_file(
    path: &Path,
    project_root: &Path,
    clipboard: &mut impl Clipboard,
) -> Result<()> {
    let block = serialize_file(path, project_root).await?;
    clipboard.copy(&block)
}

/// Copies a directory header followed by the serialized block of every
/// non-ignored file under `dir`, in walk order.
pub async fn run_copy_directory(
    dir: &Path,
    project_root: &Path,
    ignore_patterns: &[String],
    clipboard: &mut impl Clipboard,
) -> Result<()> {
    let mut output = directory_header(dir, project_root);

    let files = collect_files(dir, ignore_patterns).await?;
    debug!("Collected {} files under {}", files.len(), dir.display());

    for file in &files {
        output.push_str(&serialize_file(file, project_root).await?);
    }

    clipboard.copy(&output)
}

/// Copies the bundled prompt template verbatim.
///
/// The one deliberately absorbed failure path: on any error the command logs
/// and completes without touching the clipboard.
pub async fn run_copy_prompt(template: &Path, clipboard: &mut impl Clipboard) -> Result<()> {
    let text = match prompt::load_template(template).await {
        Ok(text) => text,
        Err(err) => {
            error!("Could not load prompt template: {err:#}");
            return Ok(());
        }
    };

    if let Err(err) = clipboard.copy(&text) {
        error!("Could not copy prompt template: {err:#}");
    }
    Ok(())
}
