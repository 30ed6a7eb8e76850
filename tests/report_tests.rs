//! Text and JSON rendering of diagnostics
use std::path::PathBuf;

use bracket_lint::report::{render_json, write_file_reports, write_output, SUCCESS_MESSAGE};
use bracket_lint::{check_source, render, validate, OutputFormat};

#[test]
fn test_success_message_for_clean_input() {
    let diagnostics = validate("fn main() { println!(\"hi\"); }");
    assert_eq!(render(&diagnostics), "✅ All brackets are properly matched!\n");
}

#[test]
fn test_every_diagnostic_rendered_once_in_order() {
    let diagnostics = validate(")\n(]\n{");
    let text = render(&diagnostics);

    let expected = "\n❌ Found 3 bracket matching error(s):\n\n\
        Line 1, Column 1: Unmatched closing bracket \")\"\n\n\
        Line 2, Column 2: Expected \")\" but found \"]\"\n\
        \x20  (Opening bracket was on line 2)\n\n\
        Line 3, Column 1: Unclosed bracket \"{\"\n\n";
    assert_eq!(text, expected);
}

#[test]
fn test_file_headers_only_for_multiple_files() {
    let single = [check_source("one.txt", "()")];
    let mut out = Vec::new();
    write_file_reports(&mut out, &single).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text, format!("{}\n", SUCCESS_MESSAGE));

    let several = [
        check_source("one.txt", "()"),
        check_source("two.txt", "// bracket-lint: off\n)"),
    ];
    let mut out = Vec::new();
    write_file_reports(&mut out, &several).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(
        text,
        format!(
            "==> one.txt <==\n{}\n\n==> two.txt <==\nskipped (bracket-lint: off)\n",
            SUCCESS_MESSAGE
        )
    );
}

#[test]
fn test_json_report_shape() {
    let reports = [check_source("src/lib.rs", "(\n]")];
    let json = render_json(&reports).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    let file = &value[0];
    assert_eq!(file["path"], "src/lib.rs");
    assert_eq!(file["skipped"], false);

    let diagnostic = &file["diagnostics"][0];
    assert_eq!(diagnostic["kind"], "MISMATCHED");
    assert_eq!(diagnostic["char"], "]");
    assert_eq!(diagnostic["line"], 2);
    assert_eq!(diagnostic["column"], 1);
    assert_eq!(diagnostic["message"], "Expected \")\" but found \"]\"");
    assert_eq!(diagnostic["opening_line"], 1);
}

#[test]
fn test_write_output_json() {
    let reports = [
        check_source(PathBuf::from("a.txt"), "("),
        check_source(PathBuf::from("b.txt"), "()"),
    ];
    let mut out = Vec::new();
    write_output(&mut out, OutputFormat::Json, &reports).expect("write");

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    let files = value.as_array().expect("array");
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["diagnostics"][0]["kind"], "UNCLOSED");
    assert!(files[1]["diagnostics"].as_array().expect("array").is_empty());
}
