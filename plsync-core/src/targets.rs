//! Destination naming — the deterministic list of files a run publishes to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A strongly-typed destination file name inside the destination repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination(pub String);

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Destination {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Deterministic destination-name plan:
/// `<prefix><zero-padded day><MONTH><YEAR>` for days `1..=days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPlan {
    /// Literal prefix, e.g. `DC`.
    pub prefix: String,
    /// Month token, e.g. `OKTOBER`.
    pub month: String,
    /// Year token, e.g. `2025`.
    pub year: String,
    /// Number of days to generate, starting at 1.
    pub days: u32,
}

impl TargetPlan {
    /// Generate the full destination list in day order.
    pub fn destinations(&self) -> Vec<Destination> {
        (1..=self.days)
            .map(|day| Destination(format!("{}{day:02}{}{}", self.prefix, self.month, self.year)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> TargetPlan {
        TargetPlan {
            prefix: "DC".to_string(),
            month: "OKTOBER".to_string(),
            year: "2025".to_string(),
            days: 30,
        }
    }

    #[test]
    fn generates_zero_padded_day_names_in_order() {
        let destinations = plan().destinations();
        assert_eq!(destinations.len(), 30);
        assert_eq!(destinations[0], Destination::from("DC01OKTOBER2025"));
        assert_eq!(destinations[4], Destination::from("DC05OKTOBER2025"));
        assert_eq!(destinations[29], Destination::from("DC30OKTOBER2025"));
    }

    #[test]
    fn zero_days_generates_nothing() {
        let mut plan = plan();
        plan.days = 0;
        assert!(plan.destinations().is_empty());
    }

    #[test]
    fn newtype_display_matches_inner() {
        assert_eq!(Destination::from("DC01OKTOBER2025").to_string(), "DC01OKTOBER2025");
    }
}
