//! Rendering of command results as porcelain lines or JSON.

pub(crate) mod deposit;
pub(crate) mod helpers;
pub(crate) mod snapshot;
pub(crate) mod traits;
pub(crate) mod withdrawal;

use serde::Serialize;

use self::traits::Formattable;
use crate::{
    cli::OutputFormat,
    errors::{DisplayableError, DisplayedError},
};

/// Print `data` to stdout in the requested format.
pub(crate) fn output<T: Serialize + Formattable>(
    data: &T,
    format: OutputFormat,
) -> Result<(), DisplayedError> {
    println!("{}", render(data, format)?);
    Ok(())
}

fn render<T: Serialize + Formattable>(
    data: &T,
    format: OutputFormat,
) -> Result<String, DisplayedError> {
    match format {
        OutputFormat::Porcelain => Ok(data.format_porcelain()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).internal_error("Failed to serialize output")
        }
    }
}
