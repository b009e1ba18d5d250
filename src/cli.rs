use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::config::ToolConfig;

pub struct Config {
    pub action: Action,
    pub project_root: PathBuf,
    pub ignore_patterns: Vec<String>,
}

pub enum Action {
    CopyFile(PathBuf),
    CopyDirectory(PathBuf),
    CopyPrompt,
}

pub fn parse_args() -> Result<Config> {
    let matches = Command::new("chatclip")
        .version("0.1.0")
        .about("Copies files or directories to the clipboard as fenced code blocks for chat assistants")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Project root used for the project name and relative paths")
                .num_args(1)
                .global(true),
        )
        .subcommand(
            Command::new("file").about("Copy a single file").arg(
                Arg::new("path")
                    .value_name("PATH")
                    .help("File to copy")
                    .required(true)
                    .num_args(1),
            ),
        )
        .subcommand(
            Command::new("dir")
                .about("Copy a directory tree")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .help("Directory to copy")
                        .required(true)
                        .num_args(1),
                )
                .arg(
                    Arg::new("ignore")
                        .short('i')
                        .long("ignore")
                        .value_name("PATTERN")
                        .help("Ignore substring, in addition to configured ones (repeatable)")
                        .num_args(1)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("prompt").about("Copy the bundled prompt template"))
        .get_matches();

    let project_root = match matches.get_one::<String>("root") {
        Some(root) => PathBuf::from(root),
        None => std::env::current_dir()?,
    };

    // Relative paths are taken from the project root; absolute ones as given.
    let resolve = |s: &String| project_root.join(s);

    let mut ignore_patterns = Vec::new();

    let action = match matches.subcommand() {
        Some(("file", sub)) => Action::CopyFile(resolve(sub.get_one::<String>("path").unwrap())),
        Some(("dir", sub)) => {
            // Only the directory copy consults the ignore configuration.
            ignore_patterns = ToolConfig::load(&project_root)?.ignore;
            if let Some(extra) = sub.get_many::<String>("ignore") {
                ignore_patterns.extend(extra.cloned());
            }
            Action::CopyDirectory(resolve(sub.get_one::<String>("path").unwrap()))
        }
        Some(("prompt", _)) => Action::CopyPrompt,
        _ => unreachable!("subcommand is required"),
    };

    Ok(Config {
        action,
        project_root,
        ignore_patterns,
    })
}
