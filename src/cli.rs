//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for pickup using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Interactively select files and print their paths (default)
//! - **read**: Interactively select files and print their contents
//! - **upload**: Upload files to a URL as a multipart form
//! - **config**: Manage application settings
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (`p`, `r`, `u`)
//! - Repeatable `--accept` filters shared by all selection commands
//! - `upload` works on explicit paths, named `--field` pairs, or an
//!   interactive selection when neither is given

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::upload::UploadMethod;

/// Command line interface for pickup
#[derive(Parser, Debug)]
#[command(
    name = "pickup",
    version,
    about = "Pick local files, read them as text, upload them over HTTP"
)]
pub struct Cli {
    /// Suppress informational output (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to `pick`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Pick {
                select: SelectArgs::default(),
            })
    }
}

/// Arguments shared by the selection-based commands
#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
    /// Select multiple files
    #[arg(short, long)]
    pub multi: bool,

    /// Restrict selectable files: ".ext" or a glob against the file name
    #[arg(short = 'a', long = "accept", value_name = "FILTER")]
    pub accept: Vec<String>,

    /// Directory to scan (defaults to the configured browse dir, then ".")
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Limit scan recursion depth (0 = top level only)
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactively select files and print their paths
    #[command(alias = "p")]
    Pick {
        #[command(flatten)]
        select: SelectArgs,
    },

    /// Interactively select files and print their contents
    #[command(alias = "r")]
    Read {
        #[command(flatten)]
        select: SelectArgs,
    },

    /// Upload files to a URL as a multipart form
    #[command(alias = "u")]
    Upload {
        /// Target URL
        url: String,

        /// Files to upload; picked interactively when omitted
        files: Vec<PathBuf>,

        /// Named form field, NAME=PATH (repeatable; takes precedence over FILES)
        #[arg(long = "field", value_name = "NAME=PATH")]
        fields: Vec<String>,

        /// HTTP method
        #[arg(short = 'X', long, value_enum)]
        method: Option<MethodArg>,

        /// Additional header, NAME:VALUE (repeatable)
        #[arg(short = 'H', long = "header", value_name = "NAME:VALUE")]
        headers: Vec<String>,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        #[command(flatten)]
        select: SelectArgs,
    },

    /// Manage application settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// HTTP method choice on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
}

impl From<MethodArg> for UploadMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Post => Self::Post,
            MethodArg::Put => Self::Put,
        }
    }
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value (key=value)
    Set {
        /// Setting in key=value form
        setting: String,
    },
    /// Get a configuration value
    Get {
        /// Setting key
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_pick() {
        let cli = Cli::try_parse_from(["pickup"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Pick { .. }));
    }

    #[test]
    fn test_pick_with_filters() {
        let cli = Cli::try_parse_from([
            "pickup", "pick", "--multi", "-a", ".txt", "-a", "*.log", "--dir", "/tmp",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Pick { select } => {
                assert!(select.multi);
                assert_eq!(select.accept, vec![".txt", "*.log"]);
                assert_eq!(select.dir, Some(PathBuf::from("/tmp")));
                assert!(select.depth.is_none());
            }
            other => panic!("Expected pick, got {other:?}"),
        }
    }

    #[test]
    fn test_command_aliases() {
        let cli = Cli::try_parse_from(["pickup", "r"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Read { .. }));

        let cli = Cli::try_parse_from(["pickup", "u", "http://example.com"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Upload { .. }));
    }

    #[test]
    fn test_upload_arguments() {
        let cli = Cli::try_parse_from([
            "pickup",
            "upload",
            "https://api.example.com/upload",
            "a.txt",
            "b.txt",
            "--method",
            "put",
            "-H",
            "authorization: Bearer t",
            "--timeout",
            "10",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Upload {
                url,
                files,
                fields,
                method,
                headers,
                timeout,
                ..
            } => {
                assert_eq!(url, "https://api.example.com/upload");
                assert_eq!(files.len(), 2);
                assert!(fields.is_empty());
                assert_eq!(method, Some(MethodArg::Put));
                assert_eq!(headers.len(), 1);
                assert_eq!(timeout, Some(10));
            }
            other => panic!("Expected upload, got {other:?}"),
        }
    }

    #[test]
    fn test_upload_named_fields() {
        let cli = Cli::try_parse_from([
            "pickup",
            "upload",
            "http://example.com",
            "--field",
            "avatar=me.png",
            "--field",
            "resume=cv.pdf",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Upload { fields, .. } => {
                assert_eq!(fields, vec!["avatar=me.png", "resume=cv.pdf"]);
            }
            other => panic!("Expected upload, got {other:?}"),
        }
    }

    #[test]
    fn test_global_quiet_flag() {
        let cli = Cli::try_parse_from(["pickup", "-q", "pick"]).unwrap();
        assert!(cli.quiet);

        let cli = Cli::try_parse_from(["pickup", "read", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_method_arg_conversion() {
        assert_eq!(UploadMethod::from(MethodArg::Post), UploadMethod::Post);
        assert_eq!(UploadMethod::from(MethodArg::Put), UploadMethod::Put);
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["pickup", "config", "set", "quiet=true"]).unwrap();
        match cli.get_command() {
            Commands::Config {
                command: ConfigCommands::Set { setting },
            } => assert_eq!(setting, "quiet=true"),
            other => panic!("Expected config set, got {other:?}"),
        }
    }
}
