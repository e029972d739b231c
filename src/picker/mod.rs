//! File selection layer
//!
//! This module provides a backend-agnostic interface for interactive file
//! selection. The abstraction allows swapping the terminal prompt
//! (dialoguer) for a mock in tests without changing business logic.
//!
//! # Core pieces
//!
//! - **[`FilePicker`]** - the selection trait (`pick_one` / `pick_many`)
//! - **[`PromptPicker`]** - terminal prompt implementation
//! - **[`MockPicker`]** - predetermined answers for tests
//! - **[`scan`]** - candidate discovery under the configured root
//!
//! Every invocation scans afresh and owns its own prompt session; nothing
//! is shared or cached between calls.

pub mod error;
pub mod mock;
pub mod prompt;
pub mod scan;
pub mod traits;
pub mod types;

pub use error::{PickerError, Result};
pub use mock::MockPicker;
pub use prompt::PromptPicker;
pub use scan::scan;
pub use traits::{FilePicker, PickerConfig};
pub use types::{CancelBehavior, SelectedFile, media_type_for};
