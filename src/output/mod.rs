//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table | OutputFormat::Pretty => Ok(table::format_table(self)),
        }
    }
}

/// One page of display rows plus the source's total count.
#[derive(Debug)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
    /// Source mode label carried into JSON metadata
    pub source: String,
}

impl<T: Tabled + Serialize> Formattable for Page<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let output = json::JsonOutput::new(&self.rows)
                    .total_count(self.total_count)
                    .source(self.source.clone());
                Ok(json::format_output(&output)?)
            }
            OutputFormat::Table | OutputFormat::Pretty => {
                Ok(table::format_page(&self.rows, self.total_count))
            }
        }
    }
}
