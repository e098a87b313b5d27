//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, Width, object::Rows},
};

/// Widest a table may render before columns wrap.
const MAX_TABLE_WIDTH: usize = 140;

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Width::wrap(MAX_TABLE_WIDTH).keep_words(true));

    table.to_string()
}

/// Format a page of rows with a "showing N of M" footer when the source holds
/// more records than were listed.
pub fn format_page<T: Tabled>(data: &[T], total_count: u64) -> String {
    let table = format_table(data);
    if !data.is_empty() && total_count > data.len() as u64 {
        format!("{}\nShowing {} of {}", table, data.len(), total_count)
    } else {
        table
    }
}
