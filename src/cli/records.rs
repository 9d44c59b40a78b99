use tabled::Table;

use crate::{
    cli::{fetch_ordered, load_config},
    success,
    types::BookTableRow,
    warning,
};

/// Prints the records of the configured set as a table, in the order
/// selected by `sort_method` (default: title ascending).
pub async fn records(sort_method: Option<String>) {
    let config = load_config();
    let (records, order) = fetch_ordered(&config, sort_method.as_deref()).await;

    if records.is_empty() {
        warning!("No records returned by the library system.");
        return;
    }

    success!("Fetched {} records, sorted by {}.", records.len(), order.label());

    let rows: Vec<BookTableRow> = records.into_iter().map(BookTableRow::from).collect();
    println!("{}", Table::new(rows));
}
