use search_cli::render::OutputFormat;
use search_cli::{load_config, run_protocol, run_query};
use search_core::SearchConfig;
use serde_json::Value;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn protocol(input: &str, max_results: usize) -> String {
    let mut out = Vec::new();
    let config = SearchConfig::default().with_max_results(max_results);
    run_protocol(Cursor::new(input), &mut out, config, OutputFormat::Text).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn protocol_prints_ranked_documents() {
    let input = "is are was a an in the with near at\n\
                 3\n\
                 a colorful parrot with green wings and red tail is lost\n\
                 a grey hound with black ears is found at the railway station\n\
                 a white cat with long furry tail is found near the red square\n\
                 white cat long tail\n";
    let output = protocol(input, 5);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("{ document_id = 2, relevance = "));
    assert!(lines[1].starts_with("{ document_id = 0, relevance = "));
}

#[test]
fn protocol_applies_minus_words() {
    let output = protocol("\n3\na b c\na c\nb\na -b\n", 5);
    assert_eq!(output, "{ document_id = 1, relevance = 0.202733 }\n");
}

#[test]
fn protocol_with_no_documents_prints_nothing() {
    assert_eq!(protocol("the\n0\ncat\n", 5), "");
}

#[test]
fn protocol_respects_result_cap() {
    let input = "\n7\nx\nx y\nx y z\nx q\nx w\nx e\nother\nx\n";
    assert_eq!(protocol(input, 5).lines().count(), 5);
    assert_eq!(protocol(input, 2).lines().count(), 2);
}

#[test]
fn query_over_jsonl_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.jsonl"),
        "{\"id\":\"d0\",\"title\":\"Cat\",\"body\":\"fluffy cat\"}\n\n{\"id\":\"d1\",\"body\":\"fluffy dog\"}\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("b.json"),
        "[{\"id\":\"d2\",\"body\":\"groomed starling\"}, {\"body\":\"cat and dog\"}]",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "cat cat cat").unwrap();

    let mut out = Vec::new();
    run_query(dir.path(), "cat -dog", "and", SearchConfig::default(), OutputFormat::Json, &mut out).unwrap();
    let json: Value = serde_json::from_slice(&out).unwrap();
    let hits = json["results"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["doc_id"], 0);
    assert_eq!(hits[0]["id"], "d0");
    assert_eq!(hits[0]["title"], "Cat");
}

#[test]
fn query_over_single_json_object() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("one.json");
    fs::write(&file, "{\"body\":\"lonely document\"}").unwrap();

    let mut out = Vec::new();
    run_query(&file, "lonely", "", SearchConfig::default(), OutputFormat::Text, &mut out).unwrap();
    // a term present in every document has zero idf but still matches
    assert_eq!(String::from_utf8(out).unwrap(), "{ document_id = 0, relevance = 0 }\n");
}

#[test]
fn query_reports_missing_input() {
    let dir = tempdir().unwrap();
    let mut out = Vec::new();
    let err = run_query(&dir.path().join("missing"), "x", "", SearchConfig::default(), OutputFormat::Text, &mut out);
    assert!(err.is_err());
}

#[test]
fn query_reports_malformed_documents() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.jsonl");
    fs::write(&file, "{\"title\":\"no body\"}\n").unwrap();
    let mut out = Vec::new();
    assert!(run_query(&file, "x", "", SearchConfig::default(), OutputFormat::Text, &mut out).is_err());
}

#[test]
fn protocol_survives_an_oversized_count() {
    let output = protocol("\n18446744073709551615\nfluffy cat\nfluffy dog\n", 5);
    // the last line read becomes a document, so the query is empty
    assert_eq!(output, "");
}

#[test]
fn config_file_sets_cap_and_stop_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, r#"{ "max_results": 1, "stop_words": ["cat"] }"#).unwrap();
    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.max_results, 1);

    let mut out = Vec::new();
    let input = "dog\n4\nfluffy cat\nfluffy dog\nfluffy bird\nplain\ncat dog fluffy\n";
    run_protocol(Cursor::new(input), &mut out, config, OutputFormat::Text).unwrap();
    let output = String::from_utf8(out).unwrap();
    // "cat" from the config and "dog" from the input are both dropped
    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("{ document_id = 0, relevance = "));
}

#[test]
fn missing_config_path_uses_defaults() {
    assert_eq!(load_config(None).unwrap(), SearchConfig::default());
    let dir = tempdir().unwrap();
    assert!(load_config(Some(dir.path().join("absent.json").as_path())).is_err());
}
