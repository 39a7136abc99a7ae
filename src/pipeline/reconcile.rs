//! Output schema reconciliation.

use crate::models::Table;
use tracing::debug;

/// Force the table into the configured final schema.
///
/// Every declared column is guaranteed to exist (absent ones are filled
/// with `Missing`, which renders as the `no_data` sentinel), working
/// columns not in the final list are dropped, and the column order
/// becomes exactly `final_columns`.
pub fn reconcile(table: &mut Table, final_columns: &[String]) {
    for column in final_columns {
        table.ensure_column(column);
    }
    table.select(final_columns);
    debug!(columns = final_columns.len(), "schema reconciled");
}
