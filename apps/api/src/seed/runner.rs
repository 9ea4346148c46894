use tracing::info;

use crate::seed::catalog::{catalog, CatalogTicket};
use crate::seed::store::{StoreError, TicketRow, TicketStore};

/// Translates the camel-case catalog into table rows.
pub fn to_rows(tickets: &[CatalogTicket]) -> Vec<TicketRow> {
    tickets.iter().map(TicketRow::from).collect()
}

/// Replaces the store's tickets with a freshly generated catalog.
///
/// Returns the inserted count. Store failures are logged; the caller decides
/// whether they matter for the exit code.
pub async fn run_seed(store: &dyn TicketStore) -> Result<usize, StoreError> {
    let tickets = catalog();

    info!("Transforming {} catalog tickets for the store...", tickets.len());
    let rows = to_rows(&tickets);

    match store.replace_all_tickets(&rows).await {
        Ok(inserted) => {
            info!("Data seeded successfully. Inserted {inserted} tickets.");
            Ok(inserted)
        }
        Err(e) => {
            e.log("Error seeding tickets");
            Err(e)
        }
    }
}
