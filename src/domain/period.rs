use serde::{Deserialize, Serialize};

use super::category::BudgetCategory;

/// Income/expense recurrence unit used to normalize amounts to a common
/// comparison basis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    Semiannual,
    Annual,
}

impl Period {
    /// Month count backing amount conversion between periods.
    pub fn months(self) -> f64 {
        match self {
            Period::Monthly => 1.0,
            Period::Semiannual => 6.0,
            Period::Annual => 12.0,
        }
    }

    /// Recognizes the period labels found in uploaded sheets ("mensuel",
    /// "Semestriel", "annuel", ...). Returns `None` for anything else so
    /// callers can decide how loudly to fall back to monthly.
    pub fn parse(label: &str) -> Option<Period> {
        let label = label.trim().to_lowercase();
        if label.contains("annuel") {
            Some(Period::Annual)
        } else if label.contains("semestr") {
            Some(Period::Semiannual)
        } else if label.contains("mensuel") {
            Some(Period::Monthly)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Monthly => "mensuel",
            Period::Semiannual => "semestriel",
            Period::Annual => "annuel",
        }
    }
}

/// Converts an amount between recurrence periods through a monthly basis.
/// No rounding is applied; display formatting happens at presentation time.
pub fn convert_amount(amount: f64, from: Period, to: Period) -> f64 {
    (amount / from.months()) * to.months()
}

/// Re-expresses every category at `target`, tagging each with the period it
/// was recorded under so the conversion stays auditable.
pub fn normalize_budget_to_period(
    categories: &[BudgetCategory],
    target: Period,
) -> Vec<BudgetCategory> {
    categories
        .iter()
        .map(|category| BudgetCategory {
            name: category.name.clone(),
            amount: convert_amount(category.amount, category.period, target),
            period: target,
            original_period: Some(category.period),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIODS: [Period; 3] = [Period::Monthly, Period::Semiannual, Period::Annual];

    #[test]
    fn conversion_round_trips_within_tolerance() {
        for from in PERIODS {
            for to in PERIODS {
                let there = convert_amount(987.65, from, to);
                let back = convert_amount(there, to, from);
                assert!(
                    (back - 987.65).abs() < 1e-9,
                    "{from:?} -> {to:?} round trip drifted: {back}"
                );
            }
        }
    }

    #[test]
    fn semiannual_amount_spreads_over_six_months() {
        let monthly = convert_amount(800.0, Period::Semiannual, Period::Monthly);
        assert!((monthly - 800.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn annual_amount_scales_up_from_monthly() {
        assert_eq!(convert_amount(100.0, Period::Monthly, Period::Annual), 1200.0);
    }

    #[test]
    fn parse_recognizes_sheet_labels() {
        assert_eq!(Period::parse("mensuel"), Some(Period::Monthly));
        assert_eq!(Period::parse("Semestriel"), Some(Period::Semiannual));
        assert_eq!(Period::parse("  ANNUEL "), Some(Period::Annual));
        assert_eq!(Period::parse("bi-annuel"), Some(Period::Annual));
        assert_eq!(Period::parse("weekly"), None);
        assert_eq!(Period::parse(""), None);
    }

    #[test]
    fn normalize_tags_original_period_and_overwrites_period() {
        let categories = vec![BudgetCategory::new("Loyer", 800.0, Period::Semiannual)];
        let normalized = normalize_budget_to_period(&categories, Period::Monthly);
        assert_eq!(normalized.len(), 1);
        assert!((normalized[0].amount - 133.33).abs() < 0.01);
        assert_eq!(normalized[0].period, Period::Monthly);
        assert_eq!(normalized[0].original_period, Some(Period::Semiannual));
    }

    #[test]
    fn normalize_is_identity_when_periods_already_match() {
        let categories = vec![
            BudgetCategory::new("Salaire", 2000.0, Period::Monthly),
            BudgetCategory::new("Loisirs", 150.5, Period::Monthly),
        ];
        let normalized = normalize_budget_to_period(&categories, Period::Monthly);
        for (before, after) in categories.iter().zip(&normalized) {
            assert_eq!(before.amount, after.amount);
            assert_eq!(after.period, Period::Monthly);
        }
    }

    #[test]
    fn period_serializes_lowercase() {
        let json = serde_json::to_string(&Period::Semiannual).unwrap();
        assert_eq!(json, "\"semiannual\"");
    }
}
