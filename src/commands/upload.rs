//! Upload command - submit files as a multipart form

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use crate::PickupError;
use crate::picker::{FilePicker, PickerConfig};
use crate::upload::{self, RequestConfig, RequestOptions, UploadError, UploadMethod, UploadSource};

type Result<T> = std::result::Result<T, PickupError>;

/// Execute the upload command
///
/// The source is decided in precedence order: named `--field` pairs,
/// then explicit file paths, then an interactive selection. The response
/// status and body are printed; the status is never interpreted as
/// success or failure.
///
/// # Errors
/// Returns an error if arguments cannot be parsed, selection fails, or
/// the request fails at the transport level.
#[allow(clippy::too_many_arguments)]
pub fn execute<P: FilePicker>(
    picker: &P,
    config: &PickerConfig,
    url: &str,
    files: Vec<PathBuf>,
    fields: &[String],
    method: Option<UploadMethod>,
    headers: &[String],
    timeout_secs: Option<u64>,
    multi: bool,
    quiet: bool,
) -> Result<()> {
    let source = if !fields.is_empty() {
        UploadSource::Named(parse_fields(fields)?)
    } else if !files.is_empty() {
        UploadSource::from_paths(files)
    } else {
        let picked = if multi {
            picker.pick_many(config)?
        } else {
            picker.pick_one(config)?.into_iter().collect()
        };
        if picked.is_empty() {
            if !quiet {
                println!("Selection cancelled.");
            }
            return Ok(());
        }
        UploadSource::from_paths(picked.into_iter().map(|f| f.path).collect())
    };

    let options = request_options(method, headers, timeout_secs)?;
    let response = upload::send(url, &source, &options)?;

    let status = response.status();
    let body = response.text().map_err(UploadError::Http)?;

    if quiet {
        println!("{}", status.as_u16());
    } else {
        let status_line = status.to_string();
        let status_line = if status.is_success() {
            status_line.green()
        } else if status.is_client_error() || status.is_server_error() {
            status_line.red()
        } else {
            status_line.yellow()
        };
        println!("{} {status_line}", "Response:".bold());

        if !body.is_empty() {
            match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(value) => match serde_json::to_string_pretty(&value) {
                    Ok(pretty) => println!("{pretty}"),
                    Err(_) => println!("{body}"),
                },
                Err(_) => println!("{body}"),
            }
        }
    }
    Ok(())
}

/// Parse repeatable `NAME=PATH` field arguments
fn parse_fields(entries: &[String]) -> Result<Vec<(String, PathBuf)>> {
    entries
        .iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(name, path)| (name.to_string(), PathBuf::from(path)))
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| {
                    PickupError::InvalidInput(format!("Invalid field '{entry}'. Use NAME=PATH"))
                })
        })
        .collect()
}

/// Parse repeatable `NAME:VALUE` header arguments
fn parse_headers(entries: &[String]) -> Result<Vec<(String, String)>> {
    entries
        .iter()
        .map(|entry| {
            entry
                .split_once(':')
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| {
                    PickupError::InvalidInput(format!("Invalid header '{entry}'. Use NAME:VALUE"))
                })
        })
        .collect()
}

/// Fold the CLI's method/header/timeout arguments into request options
fn request_options(
    method: Option<UploadMethod>,
    headers: &[String],
    timeout_secs: Option<u64>,
) -> Result<RequestOptions> {
    let headers = parse_headers(headers)?;

    if headers.is_empty() && timeout_secs.is_none() {
        return Ok(match method {
            Some(method) => RequestOptions::Method(method),
            None => RequestOptions::Default,
        });
    }

    let mut config = RequestConfig::new();
    if let Some(method) = method {
        config = config.with_method(method);
    }
    for (name, value) in headers {
        config = config.with_header(name, value);
    }
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(RequestOptions::Custom(config))
}
