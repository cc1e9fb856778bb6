// File: crates/demo/tests/load.rs
// Purpose: CSV loading, date formats and hover placement for the demo host.

use stream_core::{Curve, RenderOptions, SeriesCatalog, StreamGraph};
use stream_demo::{hover_point, load_rows, parse_date, resolve_path, unknown_columns};

fn write_csv(name: &str, body: &str) -> std::path::PathBuf {
    let path = std::path::PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn accepts_all_date_formats() {
    let want = "2024-03-01T00:00:00";
    assert_eq!(parse_date("2024-03-01").unwrap().format("%Y-%m-%dT%H:%M:%S").to_string(), want);
    assert_eq!(parse_date("2024-03").unwrap().format("%Y-%m-%dT%H:%M:%S").to_string(), want);
    assert_eq!(parse_date(" 2024-03-01 06:30:00 ").unwrap().format("%H:%M").to_string(), "06:30");
    assert_eq!(parse_date("2024-03-01T06:30:00").unwrap().format("%H:%M").to_string(), "06:30");
    assert!(parse_date("March").is_none());
    assert!(parse_date("").is_none());
}

#[test]
fn empty_cells_stay_missing_and_bad_dates_are_skipped() {
    let path = write_csv(
        "load_missing.csv",
        "Date,GPT-4,Gemini,Mistral\n2024-01-01,10,,3\nnot-a-date,1,1,1\n2024-02-01,12,8,\n",
    );
    let rows = load_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].values.get("GPT-4"), Some(&10.0));
    assert!(!rows[0].values.contains_key("Gemini"));
    assert_eq!(rows[0].value_or_zero("Gemini"), 0.0);
    assert_eq!(rows[1].value_or_zero("Gemini"), 8.0);
    assert_eq!(unknown_columns(&rows, &SeriesCatalog::default()), ["Mistral"]);
}

#[test]
fn missing_date_column_is_an_error() {
    let path = write_csv("load_nodate.csv", "When,GPT-4\n2024-01-01,1\n");
    let err = load_rows(&path).unwrap_err();
    assert!(err.to_string().contains("no Date column"));
}

#[test]
fn resolve_swaps_csv_and_cvs() {
    let path = write_csv("swap_me.cvs", "Date,GPT-4\n");
    let (found, used_alt) = resolve_path(&path.with_extension("csv")).unwrap();
    assert_eq!(found, path);
    assert!(used_alt);
    assert!(resolve_path(std::path::Path::new("target/test_out/absent.txt")).is_err());
}

#[test]
fn hover_point_lands_inside_the_series_region() {
    let path = write_csv(
        "load_hover.csv",
        "Date,GPT-4,Gemini,PaLM-2,Claude,LLaMA-3.1\n\
         2024-01,10,20,5,8,12\n2024-02,12,18,6,9,12\n2024-03,15,15,6,11,13\n\
         2024-04,18,14,7,14,13\n2024-05,20,12,7,16,14\n",
    );
    let rows = load_rows(&path).unwrap();
    // straight segments pass through the data, so the midpoint is strictly inside
    let opts = RenderOptions { curve: Curve::Linear, ..Default::default() };
    let graph = StreamGraph::new(SeriesCatalog::default(), opts);
    let frame = graph.render(&rows);
    let ctx = frame.context.clone().unwrap();
    for id in ctx.catalog.ids() {
        let at = hover_point(&ctx, graph.options(), id).unwrap();
        assert_eq!(frame.scene.hit_test(at), Some(id), "hover point for {id:?}");
    }
}
