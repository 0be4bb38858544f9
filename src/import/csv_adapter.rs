//! CSV budget parser with alias-tolerant headers and per-row leniency.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::warn;

use crate::domain::{BudgetCategory, Period};

use super::ImportError;

const CATEGORY_ALIASES: &[&str] = &["Catégorie", "Categorie", "Category", "category"];
const AMOUNT_ALIASES: &[&str] = &["Montant", "Amount", "amount"];
const PERIOD_ALIASES: &[&str] = &["Période", "Periode", "Period", "period"];

/// Parsed categories plus diagnostics about what the parser had to drop or
/// guess along the way.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub categories: Vec<BudgetCategory>,
    /// Rows dropped for a missing category name or non-numeric amount.
    pub skipped_rows: usize,
    /// Rows whose period label was unrecognized and fell back to monthly.
    pub period_fallbacks: usize,
}

/// Reads an uploaded budget sheet. Rows without a category name or with a
/// non-numeric amount are dropped with a warning, not fatally; a sheet that
/// yields no valid row at all is a failure, never an empty success.
pub fn parse_budget_csv<R: Read>(reader: R) -> Result<ImportReport, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let category_idx = find_column(&headers, CATEGORY_ALIASES);
    let amount_idx = find_column(&headers, AMOUNT_ALIASES);
    let period_idx = find_column(&headers, PERIOD_ALIASES);

    let mut report = ImportReport {
        categories: Vec::new(),
        skipped_rows: 0,
        period_fallbacks: 0,
    };

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let name = cell(&record, category_idx).trim();
        let amount = parse_amount(cell(&record, amount_idx).trim());

        let amount = match (name.is_empty(), amount) {
            (false, Some(amount)) => amount,
            _ => {
                warn!("row {} skipped: invalid data", index + 1);
                report.skipped_rows += 1;
                continue;
            }
        };

        let period_label = cell(&record, period_idx).trim();
        let period = if period_label.is_empty() {
            Period::Monthly
        } else {
            Period::parse(period_label).unwrap_or_else(|| {
                report.period_fallbacks += 1;
                Period::Monthly
            })
        };

        report
            .categories
            .push(BudgetCategory::new(name, amount, period));
    }

    if report.categories.is_empty() {
        return Err(ImportError::NoValidData);
    }
    Ok(report)
}

fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| aliases.iter().any(|alias| header.trim() == *alias))
}

fn cell<'a>(record: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|idx| record.get(idx)).unwrap_or("")
}

/// Empty cells count as zero (missing amount columns never invalidate a
/// row); anything else must parse as a number. Decimal commas are accepted
/// since the sheets are typically French.
fn parse_amount(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>()
        .or_else(|_| raw.replace(',', ".").parse::<f64>())
        .ok()
}

/// Seed rows exemplifying all three recurrence periods.
const TEMPLATE_ROWS: &[(&str, f64, Period)] = &[
    ("Loyer", 800.0, Period::Monthly),
    ("Alimentation", 400.0, Period::Monthly),
    ("Transport", 150.0, Period::Monthly),
    ("Loisirs", 200.0, Period::Monthly),
    ("Assurance", 600.0, Period::Semiannual),
    ("Salaire", 24000.0, Period::Annual),
];

/// Writes the onboarding template sheet users download and fill in.
pub fn write_template<W: Write>(writer: W) -> Result<(), ImportError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(["Catégorie", "Montant", "Période"])?;
    for (name, amount, period) in TEMPLATE_ROWS {
        let amount = format!("{}", amount);
        wtr.write_record([*name, amount.as_str(), period.label()])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Result<ImportReport, ImportError> {
        parse_budget_csv(data.as_bytes())
    }

    #[test]
    fn parses_french_headers_and_period_labels() {
        let report = parse("Catégorie,Montant,Période\nLoyer,800,Semestriel\n").unwrap();
        assert_eq!(report.categories.len(), 1);
        let loyer = &report.categories[0];
        assert_eq!(loyer.name, "Loyer");
        assert_eq!(loyer.amount, 800.0);
        assert_eq!(loyer.period, Period::Semiannual);
        assert_eq!(report.skipped_rows, 0);
        assert_eq!(report.period_fallbacks, 0);
    }

    #[test]
    fn accepts_english_header_aliases() {
        let report = parse("category,amount,period\nRent,650,annuel\n").unwrap();
        assert_eq!(report.categories[0].name, "Rent");
        assert_eq!(report.categories[0].period, Period::Annual);
    }

    #[test]
    fn missing_period_column_defaults_to_monthly_without_fallback() {
        let report = parse("Categorie,Montant\nCourses,120\n").unwrap();
        assert_eq!(report.categories[0].period, Period::Monthly);
        assert_eq!(report.period_fallbacks, 0);
    }

    #[test]
    fn unrecognized_period_labels_fall_back_and_are_counted() {
        let report =
            parse("Catégorie,Montant,Période\nAbonnement,15,hebdomadaire\nLoyer,800,mensuel\n")
                .unwrap();
        assert_eq!(report.categories[0].period, Period::Monthly);
        assert_eq!(report.period_fallbacks, 1);
    }

    #[test]
    fn invalid_rows_are_dropped_not_fatal() {
        let report = parse(
            "Catégorie,Montant,Période\n,300,mensuel\nVoiture,abc,mensuel\nLoyer,800,mensuel\n",
        )
        .unwrap();
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].name, "Loyer");
        assert_eq!(report.skipped_rows, 2);
    }

    #[test]
    fn empty_amount_cell_counts_as_zero() {
        let report = parse("Catégorie,Montant\nDivers,\n").unwrap();
        assert_eq!(report.categories[0].amount, 0.0);
    }

    #[test]
    fn decimal_commas_are_accepted() {
        let report = parse("Catégorie,Montant\nLoyer,\"133,33\"\n").unwrap();
        assert!((report.categories[0].amount - 133.33).abs() < 1e-9);
    }

    #[test]
    fn all_invalid_sheet_is_a_failure_not_an_empty_success() {
        let err = parse("Catégorie,Montant\n,100\n,abc\n").unwrap_err();
        assert!(matches!(err, ImportError::NoValidData));
        assert_eq!(err.to_string(), "no valid data found");
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        let mut buffer = Vec::new();
        write_template(&mut buffer).unwrap();
        let report = parse_budget_csv(buffer.as_slice()).unwrap();
        assert_eq!(report.categories.len(), 6);
        assert_eq!(report.skipped_rows, 0);
        assert_eq!(report.period_fallbacks, 0);
        for period in [Period::Monthly, Period::Semiannual, Period::Annual] {
            assert!(
                report.categories.iter().any(|c| c.period == period),
                "template misses a {period:?} example"
            );
        }
    }
}
