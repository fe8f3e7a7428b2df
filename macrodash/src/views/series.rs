use macrodash_core::{IndicatorQuery, MacroError, NamedSeries, SeriesResponse, build_series};

use crate::Dashboard;

impl Dashboard {
    /// Chart series for one indicator.
    ///
    /// Behavior and trade-offs:
    /// - Runs the same pipeline as [`table`](Self::table), so both views agree
    ///   on which points exist.
    /// - Dates are ISO `YYYY-MM-DD`; missing values and empty periods stay
    ///   `None` (`null` once serialized) instead of being dropped.
    /// - The single entry in `series` is named after the indicator's display
    ///   name, or the alias when the indicator is unknown.
    ///
    /// # Errors
    /// Only dataset load failures are returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macrodash::views::series",
            skip(self, query),
            fields(alias = %query.alias, view = ?query.view_frequency),
            err,
        )
    )]
    pub fn series(&self, query: &IndicatorQuery) -> Result<SeriesResponse, MacroError> {
        let dataset = self.dataset()?;
        let query = Self::resolve_query(&dataset, query);
        let data = build_series(&dataset, &query, &self.cfg);

        let name = data
            .meta
            .display_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or(query.alias);
        Ok(SeriesResponse {
            x: data.x,
            series: vec![NamedSeries { name, y: data.y }],
            meta: data.meta,
        })
    }
}
