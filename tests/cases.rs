use std::{fs, path::Path};

use calcrs::evaluate_text;
use walkdir::WalkDir;

/// What a case line expects the expression to produce.
#[derive(Debug)]
enum Expected {
    Value(f64),
    Nan,
    Error,
}

fn parse_expected(text: &str) -> Option<Expected> {
    match text {
        "error" => Some(Expected::Error),
        "nan" => Some(Expected::Nan),
        "inf" => Some(Expected::Value(f64::INFINITY)),
        "-inf" => Some(Expected::Value(f64::NEG_INFINITY)),
        _ => text.parse().ok().map(Expected::Value),
    }
}

fn approx_eq(actual: f64, expected: f64) -> bool {
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn check_case(path: &Path, line_no: usize, source: &str, expected: &Expected) {
    let result = evaluate_text(source);
    let ok = match (&result, expected) {
        (Ok(v), Expected::Value(want)) => approx_eq(*v, *want),
        (Ok(v), Expected::Nan) => v.is_nan(),
        (Err(_), Expected::Error) => true,
        _ => false,
    };

    assert!(ok,
            "{}:{line_no}: {source:?} gave {result:?}, expected {expected:?}",
            path.display());
}

#[test]
fn case_files_evaluate_as_expected() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((source, expected)) = line.rsplit_once("=>") else {
                panic!("{}:{}: missing `=>` in {line:?}", path.display(), i + 1);
            };
            let Some(expected) = parse_expected(expected.trim()) else {
                panic!("{}:{}: bad expectation in {line:?}", path.display(), i + 1);
            };

            count += 1;
            check_case(path, i + 1, source.trim(), &expected);
        }
    }

    assert!(count > 0, "No cases found in {}", root.display());
}
