//! Clipboard access behind a narrow injected collaborator.

use anyhow::{Context, Result, anyhow};
use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

/// Destination for copied text. The commands write through this trait so the
/// serializer and walker stay pure and tests can observe writes in memory.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`, with shell-utility fallbacks for
/// headless environments.
pub struct SystemClipboard {
    primary: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            primary: arboard::Clipboard::new().ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if let Some(primary) = self.primary.as_mut()
            && primary.set_text(text.to_owned()).is_ok()
        {
            debug!("Copied {} bytes via system clipboard", text.len());
            return Ok(());
        }

        self.primary = None;
        copy_via_command(text)
    }
}

fn copy_via_command(text: &str) -> Result<()> {
    for command in fallback_commands() {
        if pipe_to_command(command, text).is_ok() {
            debug!("Copied {} bytes via {}", text.len(), command[0]);
            return Ok(());
        }
    }

    Err(anyhow!("No usable clipboard backend found"))
}

fn pipe_to_command(command: &[&str], text: &str) -> Result<()> {
    let (program, args) = command
        .split_first()
        .context("Empty clipboard fallback command")?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn clipboard command: {program}"))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .context("Failed to write to clipboard command stdin")?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Clipboard command failed: {program}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("Clipboard command exited with status {status}"))
    }
}

#[cfg(target_os = "macos")]
fn fallback_commands() -> &'static [&'static [&'static str]] {
    &[&["pbcopy"]]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn fallback_commands() -> &'static [&'static [&'static str]] {
    &[&["wl-copy"], &["xclip", "-selection", "clipboard"]]
}

#[cfg(target_os = "windows")]
fn fallback_commands() -> &'static [&'static [&'static str]] {
    &[&["powershell.exe", "-NoProfile", "-Command", "Set-Clipboard"]]
}

#[cfg(not(any(unix, target_os = "windows")))]
fn fallback_commands() -> &'static [&'static [&'static str]] {
    &[]
}
