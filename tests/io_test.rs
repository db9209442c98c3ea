use pretty_assertions::assert_eq;

use rsprop::parser_io::FormulaParseTree;
use rsprop::table_io::{write_csv, write_json, write_text, TableReport};
use rsprop::{classify, get_table, ParsedFormula};

fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buffer = Vec::new();
    f(&mut buffer).expect("rendering should succeed");
    String::from_utf8(buffer).expect("output should be utf-8")
}

#[test]
fn test_text_table() {
    let table = get_table("p").expect("formula should produce a table");

    let output = render(|w| write_text(w, &table, "p"));

    assert_eq!(
        output,
        "p     | p\n\
         ------+------\n\
         True  | True\n\
         False | False\n"
    );
}

#[test]
fn test_text_table_wide_label() {
    let table = get_table("a -> b").expect("formula should produce a table");

    let output = render(|w| write_text(w, &table, "a -> b"));
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "a     | b     | a -> b");
    assert_eq!(lines[1], "------+-------+-------");
    assert_eq!(lines[3], "True  | False | False");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_csv_table() {
    let table = get_table("a & b").expect("formula should produce a table");

    let output = render(|w| write_csv(w, &table, "a & b"));

    assert_eq!(output, "a,b,a & b\n1,1,1\n1,0,0\n0,1,0\n0,0,0\n");
}

#[test]
fn test_json_report() {
    let table = get_table("p").expect("formula should produce a table");
    let classification = classify(&table).expect("table should not be empty");

    let output = render(|w| {
        write_json(
            w,
            &TableReport {
                formula: "p",
                table: &table,
                classification,
            },
        )
    });

    let value: serde_json::Value = serde_json::from_str(&output).expect("output should be json");

    assert_eq!(value["formula"], "p");
    assert_eq!(value["classification"], "Contingent");
    assert_eq!(value["table"][0]["p"], true);
    assert_eq!(value["table"][1]["result"], false);
}

#[test]
fn test_parse_tree_dot() {
    let parsed = ParsedFormula::new("!a & b").expect("input should parse");
    let tree = FormulaParseTree::new(&parsed.formula);

    assert_eq!(tree.len(), 4);

    let output = render(|w| tree.render_dot(w));

    assert!(output.starts_with("digraph parse_tree {"));
    assert!(output.contains(r#"label="And""#));
    assert!(output.contains(r#"label="Not""#));
    assert!(output.contains(r#"label="Var a""#));
    assert!(output.contains("n_0 -> n_1"));
    assert!(output.contains("n_1 -> n_2"));
    assert!(output.contains("n_0 -> n_3"));
}
