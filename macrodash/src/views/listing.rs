use macrodash_core::{IndicatorList, MacroError};

use crate::Dashboard;

impl Dashboard {
    /// Distinct aliases, configured preferred aliases first.
    ///
    /// Preferred aliases absent from the dataset are skipped; the rest follow
    /// in ascending order.
    ///
    /// # Errors
    /// Only dataset load failures are returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "macrodash::views::indicators", skip(self), err)
    )]
    pub fn indicators(&self) -> Result<IndicatorList, MacroError> {
        let dataset = self.dataset()?;
        let present = dataset.aliases();

        let mut indicators: Vec<String> = Vec::with_capacity(present.len());
        for pref in &self.cfg.preferred_aliases {
            if present.contains(&pref.as_str()) && !indicators.contains(pref) {
                indicators.push(pref.clone());
            }
        }
        for alias in present {
            if !self.cfg.preferred_aliases.iter().any(|p| p == alias) {
                indicators.push(alias.to_string());
            }
        }
        Ok(IndicatorList { indicators })
    }

    /// Alias to show when none was requested.
    ///
    /// The first configured landing alias present in the dataset, else the
    /// first alias in ascending order, else `None` for an empty dataset.
    ///
    /// # Errors
    /// Only dataset load failures are returned.
    pub fn landing_alias(&self) -> Result<Option<String>, MacroError> {
        let dataset = self.dataset()?;
        let present = dataset.aliases();
        let chosen = self
            .cfg
            .landing_aliases
            .iter()
            .find(|a| present.contains(&a.as_str()))
            .map(String::as_str)
            .or_else(|| present.first().copied());
        Ok(chosen.map(str::to_string))
    }
}
