use macrodash_core::{IndicatorQuery, MacroError, TableResponse, build_table};

use crate::Dashboard;

impl Dashboard {
    /// Display table for one indicator.
    ///
    /// Behavior and trade-offs:
    /// - A blank alias selects the alias of the dataset's first row.
    /// - Unknown aliases, malformed date bounds and unrecognized frequency codes
    ///   never fail the request; they yield an empty table, an open bound and
    ///   a monthly view respectively.
    /// - Dates are `DD.MM.YYYY`; values use one decimal at or above one in
    ///   magnitude and two below it.
    ///
    /// # Errors
    /// Only dataset load failures (`DataFileMissing`, `InvalidSchema`,
    /// `UnsupportedFormat`, `Data`) are returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macrodash::views::table",
            skip(self, query),
            fields(alias = %query.alias, view = ?query.view_frequency),
            err,
        )
    )]
    pub fn table(&self, query: &IndicatorQuery) -> Result<TableResponse, MacroError> {
        let dataset = self.dataset()?;
        let query = Self::resolve_query(&dataset, query);
        let table = build_table(&dataset, &query, &self.cfg);
        #[cfg(feature = "tracing")]
        tracing::debug!(alias = %query.alias, total = table.total, "table built");
        Ok(table)
    }
}
