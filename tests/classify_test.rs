use pretty_assertions::assert_eq;

use rsprop::{
    classify, get_table, get_type, Classification, ClassifyError, FormulaError, TruthTable,
    TruthTableRow,
};

fn classify_str(src: &str) -> Classification {
    classify(&get_table(src).expect("formula should produce a table"))
        .expect("table should not be empty")
}

fn results_table(results: &[bool]) -> TruthTable {
    TruthTable::new(
        vec![],
        results
            .iter()
            .map(|&result| TruthTableRow {
                values: vec![],
                result,
            })
            .collect(),
    )
}

#[test]
fn test_scenarios() {
    assert_eq!(classify_str("p"), Classification::Contingent);
    assert_eq!(classify_str("p | !p"), Classification::Tautology);
    assert_eq!(classify_str("p & !p"), Classification::Contradiction);
    assert_eq!(classify_str("p -> p"), Classification::Tautology);
}

#[test]
fn test_classic_formulas() {
    assert_eq!(classify_str("!(a & b) <-> !a | !b"), Classification::Tautology);
    assert_eq!(classify_str("(p -> q) & p -> q"), Classification::Tautology);
    assert_eq!(classify_str("p -> q -> p"), Classification::Tautology);
    assert_eq!(classify_str("(p -> q) -> p"), Classification::Contingent);
    assert_eq!(classify_str("!(p <-> p)"), Classification::Contradiction);
}

#[test]
fn test_empty_table() {
    assert_eq!(classify(&TruthTable::default()), Err(ClassifyError::EmptyTable));
}

#[test]
fn test_classification_consistency() {
    for len in 1..=4usize {
        for mask in 0..(1u32 << len) {
            let results: Vec<bool> = (0..len).map(|i| (mask >> i) & 1 == 1).collect();

            let expected = if results.iter().all(|&r| r) {
                Classification::Tautology
            } else if results.iter().all(|&r| !r) {
                Classification::Contradiction
            } else {
                Classification::Contingent
            };

            assert_eq!(classify(&results_table(&results)), Ok(expected), "{results:?}");
        }
    }
}

#[test]
fn test_get_type() {
    for (src, expected) in [
        ("p", Classification::Contingent),
        ("p | !p", Classification::Tautology),
        ("p & !p", Classification::Contradiction),
        ("p -> p", Classification::Tautology),
    ] {
        let table = get_table(src).expect("formula should produce a table");
        assert_eq!(get_type(src, &table), Ok(expected), "{src}");
    }
}

#[test]
fn test_get_type_rejects_foreign_table() {
    let table = get_table("p | !p").expect("formula should produce a table");

    assert_eq!(
        get_type("p", &table),
        Err(FormulaError::InconsistentTable("p".to_string()))
    );

    // a tampered result column is caught as well
    let mut rows = table.rows().to_vec();
    rows[1].result = false;
    let tampered = TruthTable::new(table.vars().to_vec(), rows);
    assert!(matches!(
        get_type("p | !p", &tampered),
        Err(FormulaError::InconsistentTable(_))
    ));

    assert!(matches!(
        get_type("p &", &table),
        Err(FormulaError::Parse(_))
    ));
}

#[test]
fn test_classification_keys() {
    assert_eq!(Classification::Tautology.as_str(), "Tautology");
    assert_eq!(Classification::Contradiction.to_string(), "Contradiction");
    assert_eq!(format!("{:>12}", Classification::Contingent), "  Contingent");

    assert_eq!(
        "contradiction".parse::<Classification>().ok(),
        Some(Classification::Contradiction)
    );
    assert!("unknown".parse::<Classification>().is_err());

    assert_eq!(
        serde_json::to_string(&Classification::Contingent).expect("should serialize"),
        r#""Contingent""#
    );
}
