//! Pickup CLI application entry point
//!
//! This is the main executable for pickup. It provides a command-line
//! interface for interactively selecting local files, printing their
//! contents and uploading them to an HTTP endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Select a file interactively (default command)
//! pickup
//! pickup pick
//!
//! # Multi-select markdown files under ./docs
//! pickup pick --multi -a .md --dir docs
//!
//! # Select a file and print its contents
//! pickup read -a .txt
//!
//! # Upload two files as file0/file1
//! pickup upload https://api.example.com/upload a.txt b.txt
//!
//! # Upload with caller-named fields and a PUT
//! pickup upload https://api.example.com/me --field avatar=me.png -X put
//!
//! # Pick interactively, then upload the selection
//! pickup upload https://api.example.com/upload --multi
//!
//! # Quiet mode (only output results)
//! pickup -q pick --multi
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/pickup/config.toml` on Linux) and created with defaults on
//! first run.

use std::path::PathBuf;

use pickup::{
    PickupError,
    cli::{Cli, Commands, ConfigCommands},
    commands,
    config::PickupConfig,
    picker::{CancelBehavior, PromptPicker},
};

type Result<T> = std::result::Result<T, PickupError>;

/// Handle the config command - manage application settings
///
/// # Arguments
/// * `config` - Application configuration
/// * `command` - Specific config subcommand to execute
/// * `quiet` - If true, suppress informational output
///
/// # Errors
///
/// Returns `PickupError` if the configuration key is invalid, value
/// parsing fails, or configuration save fails.
fn handle_config_command(
    mut config: PickupConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(PickupError::InvalidInput(
                    "Invalid format. Use: pickup config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "quiet" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        PickupError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.quiet = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set quiet = {new_value}");
                    }
                }
                "on_cancel" => {
                    let behavior = match value {
                        "empty" => CancelBehavior::Empty,
                        "fail" => CancelBehavior::Fail,
                        _ => {
                            return Err(PickupError::InvalidInput(format!(
                                "Invalid value for on_cancel: '{value}'. Use 'empty' or 'fail'"
                            )));
                        }
                    };
                    config.on_cancel = behavior;
                    config.save()?;
                    if !quiet {
                        println!("Set on_cancel = {}", behavior.as_str());
                    }
                }
                "browse_dir" => {
                    config.browse_dir = if value.is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(value))
                    };
                    config.save()?;
                    if !quiet {
                        println!("Set browse_dir = {value}");
                    }
                }
                "timeout" => {
                    config.upload.timeout_secs = if value.is_empty() || value == "none" {
                        None
                    } else {
                        Some(value.parse::<u64>().map_err(|_| {
                            PickupError::InvalidInput(format!(
                                "Invalid value for timeout: '{value}'. Use seconds or 'none'"
                            ))
                        })?)
                    };
                    config.save()?;
                    if !quiet {
                        println!("Set timeout = {value}");
                    }
                }
                _ => {
                    return Err(PickupError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: quiet, on_cancel, browse_dir, timeout"
                    )));
                }
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "quiet" => println!("{}", config.quiet),
            "on_cancel" => println!("{}", config.on_cancel.as_str()),
            "browse_dir" => match &config.browse_dir {
                Some(dir) => println!("{}", dir.display()),
                None => println!(),
            },
            "timeout" => match config.upload.timeout_secs {
                Some(secs) => println!("{secs}"),
                None => println!("none"),
            },
            _ => {
                return Err(PickupError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: quiet, on_cancel, browse_dir, timeout"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the pickup application
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `PickupError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let config = PickupConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, quiet);
    }

    let picker = PromptPicker::new();

    match command {
        Commands::Pick { select } => {
            let prompt = if select.multi { "Select files" } else { "Select file" };
            let picker_config = commands::picker_config(&config, &select).with_prompt(prompt);
            commands::pick::execute(&picker, &picker_config, select.multi, quiet)?;
        }
        Commands::Read { select } => {
            let prompt = if select.multi {
                "Select files to read"
            } else {
                "Select file to read"
            };
            let picker_config = commands::picker_config(&config, &select).with_prompt(prompt);
            commands::read::execute(&picker, &picker_config, select.multi, quiet)?;
        }
        Commands::Upload {
            url,
            files,
            fields,
            method,
            headers,
            timeout,
            select,
        } => {
            let picker_config =
                commands::picker_config(&config, &select).with_prompt("Select files to upload");
            let timeout = timeout.or(config.upload.timeout_secs);
            commands::upload::execute(
                &picker,
                &picker_config,
                &url,
                files,
                &fields,
                method.map(Into::into),
                &headers,
                timeout,
                select.multi,
                quiet,
            )?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
