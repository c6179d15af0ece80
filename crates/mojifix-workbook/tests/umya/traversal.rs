use mojifix_testkit::{build_workbook, put_strings, read_string};
use mojifix_workbook::{
    CellPass, FillMarker, MemoryCell, MemoryWorkbook, RepairConfig, repair_file, repair_workbook,
};

const ENCODED: &str = "https%3A%2F%2Fexemplo.pt%2Fcategoria%2Fprodutos%2Fp%C3%A1gina-1";
const DECODED: &str = "https://exemplo.pt/categoria/produtos/página-1";
const NEAR: &str = "https://exemplo.pt/categoria/produtos/pagina-2";

#[test]
fn rows_are_visited_before_later_rows_and_sheets() {
    let input = build_workbook(|book| {
        // B1 is reached before A2
        put_strings(book, "Sheet1", &[((1, 2), NEAR), ((2, 1), ENCODED)]);
        put_strings(book, "Segunda", &[((1, 1), NEAR)]);
    });
    let out_dir = tempfile::tempdir().expect("tempdir");
    let output = out_dir.path().join("fixed.xlsx");

    let summary = repair_file(&input, Some(&output), &RepairConfig::default()).expect("repair");

    assert_eq!(summary.repaired, 1);
    assert_eq!(summary.cache_hits, 2);
    assert_eq!(read_string(&output, "Sheet1", (2, 1)).as_deref(), Some(DECODED));
    assert_eq!(read_string(&output, "Sheet1", (1, 2)).as_deref(), Some(DECODED));
    assert_eq!(read_string(&output, "Segunda", (1, 1)).as_deref(), Some(DECODED));
}

#[test]
fn sheet_order_decides_which_variant_wins() {
    let mut plain_first = MemoryWorkbook::new();
    plain_first
        .set("A", 1, 1, MemoryCell::Text(NEAR.into()))
        .set("B", 1, 1, MemoryCell::Text(ENCODED.into()));
    let summary = repair_workbook(
        &mut plain_first,
        &mut CellPass::default(),
        &FillMarker::purple(),
        10,
    )
    .unwrap();

    // Plain ASCII needs no repair, so nothing is cached before the encoded cell.
    assert_eq!(summary.cache_hits, 0);
    assert_eq!(plain_first.text("A", 1, 1), Some(NEAR));
    assert_eq!(plain_first.text("B", 1, 1), Some(DECODED));

    let mut encoded_first = MemoryWorkbook::new();
    encoded_first
        .set("A", 1, 1, MemoryCell::Text(ENCODED.into()))
        .set("B", 1, 1, MemoryCell::Text(NEAR.into()));
    let summary = repair_workbook(
        &mut encoded_first,
        &mut CellPass::default(),
        &FillMarker::purple(),
        10,
    )
    .unwrap();

    assert_eq!(summary.cache_hits, 1);
    assert_eq!(encoded_first.text("B", 1, 1), Some(DECODED));
}
