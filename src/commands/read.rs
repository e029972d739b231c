//! Read command - select files and print their contents

use std::io::{self, Write};

use colored::Colorize;

use crate::PickupError;
use crate::content::{pick_many_text, pick_one_text};
use crate::picker::{FilePicker, PickerConfig};

type Result<T> = std::result::Result<T, PickupError>;

/// Execute the read command - select files and print their decoded text
///
/// In multi mode each file is preceded by a header line naming it;
/// quiet mode prints the raw content only.
///
/// # Errors
/// Returns an error if selection fails or any chosen file cannot be
/// decoded as UTF-8.
pub fn execute<P: FilePicker>(
    picker: &P,
    config: &PickerConfig,
    multi: bool,
    quiet: bool,
) -> Result<()> {
    if multi {
        let texts = pick_many_text(picker, config)?;
        if texts.is_empty() {
            if !quiet {
                println!("Selection cancelled.");
            }
            return Ok(());
        }

        for (i, text) in texts.iter().enumerate() {
            if !quiet {
                if i > 0 {
                    println!();
                }
                println!("{}", format!("==> {} <==", text.file.path.display()).bold());
            }
            print!("{}", text.content);
        }
    } else {
        match pick_one_text(picker, config)? {
            Some(text) => print!("{}", text.content),
            None => {
                if !quiet {
                    println!("Selection cancelled.");
                }
                return Ok(());
            }
        }
    }

    io::stdout().flush()?;
    Ok(())
}
