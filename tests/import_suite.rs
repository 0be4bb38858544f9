use std::fs::File;

use dreampilot::domain::{normalize_budget_to_period, Period};
use dreampilot::import::{parse_budget_csv, write_template, ImportError};
use tempfile::tempdir;

#[test]
fn template_written_to_disk_imports_back() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("template_budget.csv");

    write_template(File::create(&path).unwrap()).expect("write template");
    let report = parse_budget_csv(File::open(&path).unwrap()).expect("parse template");

    assert_eq!(report.categories.len(), 6);
    let assurance = report
        .categories
        .iter()
        .find(|category| category.name == "Assurance")
        .expect("seed row present");
    assert_eq!(assurance.amount, 600.0);
    assert_eq!(assurance.period, Period::Semiannual);
}

#[test]
fn imported_semiannual_row_normalizes_to_monthly() {
    let sheet = "Catégorie,Montant,Période\nLoyer,800,Semestriel\n";
    let report = parse_budget_csv(sheet.as_bytes()).expect("sheet parses");
    let normalized = normalize_budget_to_period(&report.categories, Period::Monthly);

    assert!((normalized[0].amount - 133.33).abs() < 0.01);
    assert_eq!(normalized[0].period, Period::Monthly);
    assert_eq!(normalized[0].original_period, Some(Period::Semiannual));
}

#[test]
fn unreadable_sheet_surfaces_a_single_failure_reason() {
    let bytes: &[u8] = &[0xff, 0xfe, 0x00, 0x41];
    let err = parse_budget_csv(bytes).unwrap_err();
    assert!(matches!(err, ImportError::Read(_)));
}
