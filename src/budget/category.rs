use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Discrete spending tier derived from where the budget sits inside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Economic,
    Moderate,
    Comfortable,
    Premium,
}

impl BudgetCategory {
    /// Select the tier for a percentage in `[0, 100]`.
    ///
    /// Thresholds are half-open: 25.0 is already `Moderate`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 25.0 {
            BudgetCategory::Economic
        } else if percentage < 50.0 {
            BudgetCategory::Moderate
        } else if percentage < 75.0 {
            BudgetCategory::Comfortable
        } else {
            BudgetCategory::Premium
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetCategory::Economic => "Economic",
            BudgetCategory::Moderate => "Moderate",
            BudgetCategory::Comfortable => "Comfortable",
            BudgetCategory::Premium => "Premium",
        }
    }

    /// Badge color shown next to the label.
    pub fn color(&self) -> &'static str {
        match self {
            BudgetCategory::Economic => "#10B981",
            BudgetCategory::Moderate => "#3B82F6",
            BudgetCategory::Comfortable => "#F59E0B",
            BudgetCategory::Premium => "#8B5CF6",
        }
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(BudgetCategory::from_percentage(0.0), BudgetCategory::Economic);
        assert_eq!(BudgetCategory::from_percentage(24.999_999), BudgetCategory::Economic);
        assert_eq!(BudgetCategory::from_percentage(25.0), BudgetCategory::Moderate);
        assert_eq!(BudgetCategory::from_percentage(49.999_999), BudgetCategory::Moderate);
        assert_eq!(BudgetCategory::from_percentage(50.0), BudgetCategory::Comfortable);
        assert_eq!(BudgetCategory::from_percentage(74.999_999), BudgetCategory::Comfortable);
        assert_eq!(BudgetCategory::from_percentage(75.0), BudgetCategory::Premium);
        assert_eq!(BudgetCategory::from_percentage(100.0), BudgetCategory::Premium);
    }

    #[test]
    fn test_labels_and_colors_are_distinct() {
        let all = [
            BudgetCategory::Economic,
            BudgetCategory::Moderate,
            BudgetCategory::Comfortable,
            BudgetCategory::Premium,
        ];
        for (i, a) in all.iter().enumerate() {
            assert_eq!(a.to_string(), a.label());
            for b in &all[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&BudgetCategory::Comfortable).unwrap();
        assert_eq!(json, "\"comfortable\"");
    }
}
