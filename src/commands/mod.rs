//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed
//! CLI args and runs the operation against a picker backend.

use std::path::PathBuf;

use crate::cli::SelectArgs;
use crate::config::PickupConfig;
use crate::picker::PickerConfig;

pub mod pick;
pub mod read;
pub mod upload;

/// Build a picker configuration from the app config and CLI arguments
///
/// CLI values take precedence; the configured browse dir and default
/// filter apply when the command passes none.
#[must_use]
pub fn picker_config(app: &PickupConfig, select: &SelectArgs) -> PickerConfig {
    let root = select
        .dir
        .clone()
        .or_else(|| app.browse_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let accepted = if select.accept.is_empty() {
        app.accepted.clone()
    } else {
        select.accept.clone()
    };

    let mut config = PickerConfig::new(root)
        .with_accepted(accepted)
        .with_on_cancel(app.on_cancel);
    if let Some(depth) = select.depth {
        config = config.with_max_depth(depth);
    }
    config
}
