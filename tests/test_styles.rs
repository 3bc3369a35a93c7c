// Call style tests
// Author: Gabriel Demetrios Lafis

use record_pipeline::{
    data::{sample_users, UserRecord},
    runner::{resolve_styles, run_examples, CallStyle},
    utils::AppError,
};

const EXPECTED_OUTPUT: &str = "
EXAMPLE 1 - Simple (no types)
LAWRENCE PEMBERTON
JENNIFER MATTHEWS

EXAMPLE 2 - Intermediate (parameter types but not function types)
LAWRENCE PEMBERTON
JENNIFER MATTHEWS

EXAMPLE 3 - Advanced (parameter types and function types)
LAWRENCE PEMBERTON
JENNIFER MATTHEWS

EXAMPLE 4 - Old school v1 (inline function declarations, no types)
LAWRENCE PEMBERTON
JENNIFER MATTHEWS

EXAMPLE 5 - Old school v2 (calling named functions, with types)
LAWRENCE PEMBERTON
JENNIFER MATTHEWS
";

fn run_style(style: CallStyle, records: &[UserRecord]) -> Vec<u8> {
    let mut out = Vec::new();
    style.run(records, &mut out).unwrap();
    out
}

#[test]
fn test_run_all_examples() {
    let mut out = Vec::new();
    let summaries = run_examples(&CallStyle::all(), sample_users(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_OUTPUT);
    assert_eq!(summaries.len(), 5);
    for (summary, style) in summaries.iter().zip(CallStyle::all()) {
        assert_eq!(summary.pipeline, format!("example{}", style.number()));
        assert_eq!(summary.input, 3);
        assert_eq!(summary.delivered, 2);
    }
}

#[test]
fn test_styles_produce_identical_output() {
    let records = vec![
        UserRecord::new(" X", "Leading Space"),
        UserRecord::new("NoSpace", "No Space"),
        UserRecord::new("Two Words", "Ada Lovelace"),
        UserRecord::new("a b c", "Grace Hopper"),
        UserRecord::new("Trailing ", "Émile Zola"),
    ];

    let empty: Vec<UserRecord> = Vec::new();

    for input in [sample_users(), &records[..], &empty[..]] {
        let expected = run_style(CallStyle::NamedFunctions, input);
        for style in CallStyle::all() {
            assert_eq!(run_style(style, input), expected, "style {}", style.number());
        }
    }

    assert_eq!(
        String::from_utf8(run_style(CallStyle::Simple, &records)).unwrap(),
        "ADA LOVELACE\nGRACE HOPPER\nÉMILE ZOLA\n"
    );
}

#[test]
fn test_empty_input_prints_headers_only() {
    let mut out = Vec::new();
    run_examples(&[CallStyle::Advanced], &[], &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nEXAMPLE 3 - Advanced (parameter types and function types)\n"
    );
}

#[test]
fn test_style_numbers() {
    for style in CallStyle::all() {
        assert_eq!(CallStyle::from_number(style.number()), Some(style));
        assert!(style.header().starts_with(&format!("EXAMPLE {} - ", style.number())));
    }

    assert_eq!(CallStyle::from_number(0), None);
    assert_eq!(CallStyle::from_number(6), None);
}

#[test]
fn test_resolve_styles() {
    assert_eq!(resolve_styles(&[]).unwrap(), CallStyle::all().to_vec());
    assert_eq!(
        resolve_styles(&[5, 1]).unwrap(),
        vec![CallStyle::NamedFunctions, CallStyle::Simple]
    );

    match resolve_styles(&[2, 9]) {
        Err(AppError::Config(msg)) => assert!(msg.contains('9')),
        other => panic!("expected config error, got {:?}", other),
    }
}
