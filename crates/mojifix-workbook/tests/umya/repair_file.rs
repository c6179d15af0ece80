use mojifix_testkit::{build_workbook, build_workbook_in, put_strings, read_fill, read_string};
use mojifix_workbook::{
    FillMarker, IoError, RepairConfig, RepairOptions, default_output_path, repair_file,
};

fn mixed_sheet(book: &mut umya_spreadsheet::Spreadsheet) {
    put_strings(
        book,
        "Sheet1",
        &[
            ((1, 1), "SÃ£o Paulo"),
            ((2, 1), "https%3A%2F%2Fexemplo.pt%2Fcat%C3%A1logo"),
            ((1, 2), "p\u{221A}\u{2260}lula"),
            ((2, 2), "bad%C3%28"),
        ],
    );
    let ws = book.get_sheet_by_name_mut("Sheet1").unwrap();
    ws.get_cell_mut((3, 1)).set_value_number(42);
    put_strings(book, "Links", &[((1, 1), "Lisboa")]);
}

#[test]
fn writes_corrected_copy_next_to_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = build_workbook_in(dir.path(), "teste.xlsx", mixed_sheet);

    let summary = repair_file(&input, None, &RepairConfig::default()).expect("repair");
    let output = dir.path().join("teste_unicode_allpages.xlsx");
    assert_eq!(default_output_path(&input), output);
    assert!(output.exists());

    assert_eq!(summary.visited, 5);
    assert_eq!(summary.repaired, 4);
    assert_eq!(summary.cache_hits, 0);
    assert_eq!(summary.unrecoverable, 1);
    assert_eq!(summary.unrecoverable_cells, vec!["Sheet1!B2"]);
    assert_eq!(summary.sheets["Links"].visited, 1);
    assert_eq!(summary.sheets["Links"].repaired, 0);

    assert_eq!(
        read_string(&output, "Sheet1", (1, 1)).as_deref(),
        Some("São Paulo")
    );
    assert_eq!(
        read_string(&output, "Sheet1", (2, 1)).as_deref(),
        Some("https://exemplo.pt/catálogo")
    );
    assert_eq!(
        read_string(&output, "Sheet1", (1, 2)).as_deref(),
        Some("pílula")
    );
    assert_eq!(
        read_string(&output, "Sheet1", (2, 2)).as_deref(),
        Some("bad\u{FFFD}(")
    );
    assert_eq!(
        read_string(&output, "Sheet1", (3, 1)).as_deref(),
        Some("42")
    );
    assert_eq!(read_string(&output, "Links", (1, 1)).as_deref(), Some("Lisboa"));

    assert_eq!(
        read_fill(&output, "Sheet1", (2, 2)).as_deref(),
        Some(FillMarker::PURPLE_ARGB)
    );
    assert_eq!(read_fill(&output, "Sheet1", (1, 1)), None);
}

#[test]
fn input_workbook_is_left_untouched() {
    let input = build_workbook(mixed_sheet);
    let out_dir = tempfile::tempdir().expect("tempdir");
    let output = out_dir.path().join("fixed.xlsx");

    repair_file(&input, Some(&output), &RepairConfig::default()).expect("repair");

    assert_eq!(
        read_string(&input, "Sheet1", (1, 1)).as_deref(),
        Some("SÃ£o Paulo")
    );
    assert_eq!(read_fill(&input, "Sheet1", (2, 2)), None);
    assert_eq!(
        read_string(&output, "Sheet1", (1, 1)).as_deref(),
        Some("São Paulo")
    );
}

#[test]
fn second_pass_over_output_changes_nothing() {
    let input = build_workbook(mixed_sheet);
    let out_dir = tempfile::tempdir().expect("tempdir");
    let first = out_dir.path().join("first.xlsx");
    let second = out_dir.path().join("second.xlsx");

    repair_file(&input, Some(&first), &RepairConfig::default()).expect("first pass");
    let summary = repair_file(&first, Some(&second), &RepairConfig::default()).expect("second");

    assert_eq!(summary.visited, 5);
    assert_eq!(summary.changed(), 0);
    assert_eq!(summary.unrecoverable, 0);
    assert_eq!(
        read_string(&second, "Sheet1", (2, 1)).as_deref(),
        Some("https://exemplo.pt/catálogo")
    );
}

#[test]
fn custom_fill_colour_is_used() {
    let input = build_workbook(mixed_sheet);
    let out_dir = tempfile::tempdir().expect("tempdir");
    let output = out_dir.path().join("fixed.xlsx");
    let config = RepairConfig {
        fill: FillMarker::parse("#FFC000").unwrap(),
        ..RepairConfig::default()
    };

    repair_file(&input, Some(&output), &config).expect("repair");
    assert_eq!(
        read_fill(&output, "Sheet1", (2, 2)).as_deref(),
        Some("FFFFC000")
    );
}

#[test]
fn missing_input_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("teste.xlsx");
    let err = repair_file(&missing, None, &RepairConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::NotFound(ref p) if p == &missing));
    assert!(!dir.path().join("teste_unicode_allpages.xlsx").exists());
}

#[test]
fn output_equal_to_input_is_refused() {
    let input = build_workbook(mixed_sheet);
    let err = repair_file(&input, Some(&input), &RepairConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::WouldOverwrite(_)), "{err}");
    assert_eq!(
        read_string(&input, "Sheet1", (1, 1)).as_deref(),
        Some("SÃ£o Paulo")
    );
}

#[test]
fn invalid_options_fail_before_reading() {
    let input = build_workbook(mixed_sheet);
    let config = RepairConfig {
        options: RepairOptions {
            similarity_threshold: 1.5,
            ..RepairOptions::default()
        },
        ..RepairConfig::default()
    };
    let err = repair_file(&input, None, &config).unwrap_err();
    assert!(matches!(err, IoError::Config(_)), "{err}");
    assert!(!default_output_path(&input).exists());
}

#[test]
fn summary_serializes_to_json() {
    let input = build_workbook(mixed_sheet);
    let out_dir = tempfile::tempdir().expect("tempdir");
    let summary = repair_file(
        &input,
        Some(&out_dir.path().join("fixed.xlsx")),
        &RepairConfig::default(),
    )
    .expect("repair");

    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["repaired"], 4);
    assert_eq!(json["sheets"]["Sheet1"]["unrecoverable"], 1);
    assert_eq!(json["unrecoverable_cells"][0], "Sheet1!B2");
}
