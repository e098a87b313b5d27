//! Single-record output shared by the `get` commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::ContentApi;
use crate::error::{Error, Result};
use crate::output::Formattable;
use crate::output::json::{JsonOutput, format_output};

/// Print one record: JSON envelope, a one-row table, or the `pretty` view.
pub fn print_detail<M, D>(ctx: &CommandContext, record: M, pretty: impl FnOnce(&M)) -> Result<()>
where
    M: Serialize,
    D: From<M> + Tabled + Serialize,
{
    match ctx.format {
        OutputFormat::Json => {
            let output =
                JsonOutput::new(&record).source(ctx.loader.source_mode().to_string());
            println!("{}", format_output(&output)?);
        }
        OutputFormat::Table => vec![D::from(record)].print(OutputFormat::Table)?,
        OutputFormat::Pretty => pretty(&record),
    }
    ctx.note_source();
    Ok(())
}

/// Error for a slug neither source knows about.
pub fn not_found(kind: &str, slug: &str) -> Error {
    Error::Other(format!("{} '{}' not found", kind, slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = not_found("Blog post", "missing");
        assert_eq!(err.to_string(), "Operation failed: Blog post 'missing' not found");
    }
}
