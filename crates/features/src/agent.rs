//! Low-activity travel agent flag.
//!
//! The flag depends on how often an agent occurs, which is a cross-row
//! statistic. [`AgentActivity`] learns the counts from one frame and the
//! frozen [`AgentActivityCounts`] applies them to any frame, so validation
//! and holdout rows are judged by training-partition activity.

use std::collections::BTreeMap;

use hotelprep_primitives::columns as c;
use hotelprep_traits::{Fit, Transform, TransformError};
use hotelprep_utils::string_values;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Agents with fewer bookings than this are flagged as low activity.
pub const DEFAULT_LOW_ACTIVITY_THRESHOLD: u64 = 1000;

/// Configuration for the low-activity agent flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentActivity {
    /// Minimum booking count of an active agent.
    pub threshold: u64,
}

impl Default for AgentActivity {
    fn default() -> Self {
        Self { threshold: DEFAULT_LOW_ACTIVITY_THRESHOLD }
    }
}

impl AgentActivity {
    /// Flag agents with fewer than `threshold` bookings.
    #[must_use]
    pub const fn new(threshold: u64) -> Self {
        Self { threshold }
    }
}

/// Agent identifiers of every row, with missing agents as `"unknown"`.
fn agent_keys(df: &DataFrame) -> Result<Vec<String>, TransformError> {
    Ok(string_values(df, c::AGENT)?
        .into_iter()
        .map(|agent| agent.unwrap_or_else(|| c::UNKNOWN.to_string()))
        .collect())
}

impl Fit for AgentActivity {
    type Fitted = AgentActivityCounts;

    fn fit(&self, df: &DataFrame) -> Result<Self::Fitted, TransformError> {
        let mut counts = BTreeMap::new();
        for agent in agent_keys(df)? {
            *counts.entry(agent).or_insert(0) += 1;
        }
        debug!(agents = counts.len(), threshold = self.threshold, "fitted agent activity");
        Ok(AgentActivityCounts { threshold: self.threshold, counts })
    }
}

/// Booking counts per agent, learned from one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentActivityCounts {
    threshold: u64,
    counts: BTreeMap<String, u64>,
}

impl AgentActivityCounts {
    /// Bookings seen for `agent`; zero for an agent absent at fit time.
    #[must_use]
    pub fn count(&self, agent: &str) -> u64 {
        self.counts.get(agent).copied().unwrap_or(0)
    }

    /// Whether `agent` is below the activity threshold.
    #[must_use]
    pub fn is_low_activity(&self, agent: &str) -> bool {
        self.count(agent) < self.threshold
    }

    /// The activity threshold.
    #[must_use]
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Rows seen at fit time.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct agents seen at fit time.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no agent was seen at fit time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Transform for AgentActivityCounts {
    fn transform(&self, mut df: DataFrame) -> Result<DataFrame, TransformError> {
        let flags: Vec<i32> =
            agent_keys(&df)?.iter().map(|agent| i32::from(self.is_low_activity(agent))).collect();
        df.with_column(Column::new(c::IS_LOW_ACTIVITY_AGENT.into(), flags))?;
        Ok(df)
    }

    fn name(&self) -> &str {
        "agent_activity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agents(values: &[Option<&str>]) -> DataFrame {
        df! { c::AGENT => values }.unwrap()
    }

    fn flags(df: &DataFrame) -> Vec<i32> {
        df.column(c::IS_LOW_ACTIVITY_AGENT).unwrap().i32().unwrap().into_no_null_iter().collect()
    }

    #[test]
    fn counts_missing_agents_as_unknown() {
        let df = agents(&[Some("9"), None, Some("9"), None, None]);
        let fitted = AgentActivity::new(3).fit(&df).unwrap();
        assert_eq!(fitted.count("9"), 2);
        assert_eq!(fitted.count(c::UNKNOWN), 3);
        assert_eq!(fitted.len(), 2);
        assert_eq!(fitted.total(), 5);

        let out = fitted.transform(df).unwrap();
        assert_eq!(flags(&out), vec![1, 0, 1, 0, 0]);
    }

    #[test]
    fn numeric_agent_ids_match_string_ids() {
        let train = df! { c::AGENT => &[Some(9.0), Some(9.0), None] }.unwrap();
        let fitted = AgentActivity::new(2).fit(&train).unwrap();
        assert_eq!(fitted.count("9"), 2);
        assert!(!fitted.is_low_activity("9"));
    }

    #[test]
    fn unseen_agent_is_low_activity() {
        let train = agents(&[Some("9"), Some("9")]);
        let fitted = AgentActivity::new(2).fit(&train).unwrap();
        let out = fitted.transform(agents(&[Some("240"), Some("9")])).unwrap();
        assert_eq!(flags(&out), vec![1, 0]);
    }

    #[test]
    fn batch_local_flag_differs_from_fitted_flag() {
        // Agent "9" is active in the training rows but rare in the
        // validation rows; refitting on validation flips its flag.
        let train = agents(&[Some("9"), Some("9"), Some("9"), Some("240")]);
        let validation = agents(&[Some("9"), Some("240"), Some("240"), Some("240")]);
        let activity = AgentActivity::new(3);

        let fitted = activity.fit(&train).unwrap();
        let frozen = flags(&fitted.transform(validation.clone()).unwrap());
        let (_, local) = activity.fit_transform(validation).unwrap();
        let local = flags(&local);

        assert_eq!(frozen, vec![0, 1, 1, 1]);
        assert_eq!(local, vec![1, 0, 0, 0]);
        assert_ne!(frozen, local);
    }

    #[test]
    fn missing_agent_column() {
        let df = df! { "hotel" => &["City Hotel"] }.unwrap();
        let err = AgentActivity::default().fit(&df).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(col) if col == c::AGENT));
    }

    #[test]
    fn default_threshold() {
        assert_eq!(AgentActivity::default().threshold, DEFAULT_LOW_ACTIVITY_THRESHOLD);
    }
}
