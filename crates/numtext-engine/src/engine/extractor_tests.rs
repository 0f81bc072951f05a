use indoc::indoc;
use serde_json::json;

use numtext_compiler::{Error, Parser, Section};

use super::{
    CaptureExt, CaptureList, Extractor, MatchLimits, SCAN_STEPS_PER_BYTE, Value, column_stack_2d,
};

fn to_json(list: &CaptureList) -> serde_json::Value {
    serde_json::to_value(list).unwrap()
}

fn body_only(body: impl Into<Section>) -> Parser {
    Parser::new(Section::Absent, body, Section::Absent).unwrap()
}

const DATA_BLOCKS: &str = indoc! {"
    $data
          1      2      3
      1   0.1   -2.5   3.75
      2   4.   .5   -6.0
    $data
          1      2      3
      1   7.0   8.5   9.25
      2   -1.0   0.0   1.5
"};

fn data_parser() -> Parser {
    let block = Parser::new("#++i", "#.+i #!+.f", Section::Absent).unwrap();
    Parser::new("@.$data", block, Section::Absent).unwrap()
}

#[test]
fn nested_multiblock_body() {
    let body = data_parser().capture_body(DATA_BLOCKS).unwrap();
    assert_eq!(
        to_json(&body),
        json!([
            [[["0.1", "-2.5", "3.75"], ["4.", ".5", "-6.0"]]],
            [[["7.0", "8.5", "9.25"], ["-1.0", "0.0", "1.5"]]],
        ])
    );
}

#[test]
fn nested_multiblock_struct() {
    let records = data_parser().capture_struct(DATA_BLOCKS).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        to_json(&records)[1],
        json!({
            "head": [[]],
            "body": [{
                "head": [[]],
                "body": [["7.0", "8.5", "9.25"], ["-1.0", "0.0", "1.5"]],
                "tail": null,
            }],
            "tail": null,
        })
    );
}

#[test]
fn one_or_more_capture_splits() {
    let text = "This has numbers 2 5 -54 3.8 -1.e-12 with end space.";
    let body = body_only("~ #!+.g ~").capture_body(text).unwrap();
    assert_eq!(to_json(&body), json!([[["2", "5", "-54", "3.8", "-1.e-12"]]]));
}

#[test]
fn misc_capture_stays_in_one_word() {
    let text = indoc! {"
        This line has Cu in it.
        This line has foo bar in it.
    "};
    let body = body_only("~ @.has &!. ~").capture_body(text).unwrap();
    assert_eq!(to_json(&body), json!([[["Cu"], ["foo"]]]));
}

#[test]
fn optional_tail_present_and_absent() {
    let parser = Parser::new("@.begin", "#!.+i", "? @.note #!.+i").unwrap();
    let extractor = Extractor::new(&parser).unwrap();

    let with_note = extractor.capture_struct("begin\n1\n2\nnote 5\n").unwrap();
    assert_eq!(
        to_json(&with_note),
        json!([{"head": [[]], "body": [["1"], ["2"]], "tail": [["5"]]}])
    );

    let without = extractor.capture_struct("begin\n1\n2\n").unwrap();
    assert_eq!(without.field("tail").unwrap(), Some(&Value::Null));
    assert_eq!(
        to_json(&without),
        json!([{"head": [[]], "body": [["1"], ["2"]], "tail": null}])
    );
}

#[test]
fn missing_optional_line_group_is_null() {
    let parser = body_only(["@.a #!.+i", "? @.b #!.+i", "@.c #!.+i"]);
    let body = parser.capture_body("a 1\nc 3\n\na 4\nb 5\nc 6").unwrap();
    assert_eq!(
        to_json(&body),
        json!([[["1", null, "3"]], [["4", "5", "6"]]])
    );
}

#[test]
fn sequence_head_and_tail_rows() {
    let text = indoc! {"
        $vibrational_frequencies
        3
            0      0.000000
            1      0.000000
            2    512.345678
        #
        $normal_modes
        3 3
    "};
    let parser = Parser::new(
        ["@.$vibrational_frequencies", "#!.+i"],
        "#.+i #!..f",
        ["~", "@.$normal_modes", "#!++i"],
    )
    .unwrap();

    let records = parser.capture_struct(text).unwrap();
    assert_eq!(records.field("head").unwrap(), Some(&Value::Array(vec![Value::Array(vec!["3".into()])])));
    assert_eq!(
        serde_json::to_value(records.field("tail").unwrap()).unwrap(),
        json!([["3", "3"]])
    );
    assert_eq!(
        to_json(&parser.capture_body(text).unwrap()),
        json!([[["0.000000"], ["0.000000"], ["512.345678"]]])
    );
}

#[test]
fn separate_blocks_are_separate_entries() {
    let parser = Parser::new("@.begin", "#!.+i", Section::Absent).unwrap();
    let records = parser.capture_parser("begin\n1\nbegin\n2\n3").unwrap();
    assert_eq!(
        to_json(&records),
        json!([
            {"head": [[]], "body": [["1"]], "tail": null},
            {"head": [[]], "body": [["2"], ["3"]], "tail": null},
        ])
    );

    let err = records.field("body").unwrap_err();
    assert_eq!(
        err,
        Error::ThruList {
            key: "body".into(),
            len: 2
        }
    );
}

#[test]
fn column_stacked_blocks() {
    let text = indoc! {"
        $hessian
        4
                          0          1          2
              0      1.000000   2.000000   3.000000
              1      5.000000   6.000000   7.000000
              2      9.000000  10.000000  11.000000
              3     13.000000  14.000000  15.000000
                          3
              0      4.000000
              1      8.000000
              2     12.000000
              3     16.000000

        $atoms
    "};
    let block = Parser::new("#++i", "#.+i #!+.f", Section::Absent).unwrap();
    let parser = Parser::new(["@.$hessian", "#.+i"], block, Section::Absent).unwrap();

    let body = parser.capture_body(text).unwrap();
    assert_eq!(body.len(), 1);
    let blocks = body[0].as_array().unwrap();
    assert_eq!(blocks.len(), 2);

    let stacked = column_stack_2d(blocks);
    assert_eq!(
        serde_json::to_value(&stacked).unwrap(),
        json!([
            ["1.000000", "2.000000", "3.000000", "4.000000"],
            ["5.000000", "6.000000", "7.000000", "8.000000"],
            ["9.000000", "10.000000", "11.000000", "12.000000"],
            ["13.000000", "14.000000", "15.000000", "16.000000"],
        ])
    );
}

#[test]
fn no_match_is_empty() {
    let parser = Parser::new("@.$data", "#!.+i", Section::Absent).unwrap();
    assert!(parser.capture_body("nothing here\n").unwrap().is_empty());
    assert!(parser.capture_struct("").unwrap().is_empty());
}

#[test]
fn extractor_reused_across_documents() {
    let parser = body_only("@.x= #!..f");
    let extractor = Extractor::new(&parser).unwrap();
    assert_eq!(extractor.pattern(), parser.pattern(true).unwrap());

    for (text, expected) in [("x= 1.5", "1.5"), ("x= -.25", "-.25")] {
        let body = extractor.capture_body(text).unwrap();
        assert_eq!(to_json(&body), json!([[[expected]]]));
    }
}

#[test]
fn backtrack_limit_is_reported() {
    // Five lazy spans before a literal that never occurs.
    let parser = body_only("~ ~ ~ ~ ~ @.zzz");
    let limits = MatchLimits::new().backtrack_limit(10);
    let extractor = Extractor::with_limits(&parser, limits).unwrap();
    assert_eq!(extractor.limits().get_backtrack_limit(), 10);

    let text = "word ".repeat(200);
    let err = extractor.capture_body(&text).unwrap_err();
    assert!(matches!(err, Error::Match(_)), "{err:?}");
}

#[test]
fn budget_grows_with_span_length() {
    let limits = MatchLimits::new().backtrack_limit(100);
    assert_eq!(limits.budget_for(0), 100);
    assert_eq!(limits.budget_for(10), 100 + 10 * SCAN_STEPS_PER_BYTE);
    assert_eq!(MatchLimits::new().budget_for(usize::MAX), usize::MAX);
}

/// About 1.1 MB of report lines that match nothing.
fn noise() -> String {
    "  step 12345  energy -1.234567  converged no\n".repeat(25_000)
}

#[test]
fn large_document_with_nested_block() {
    let mut text = noise();
    assert!(text.len() > 1_000_000);
    text.push_str(indoc! {"
        $data
              1      2      3
          1   0.1   -2.5   3.75
          2   4.   .5   -6.0
    "});

    let body = data_parser().capture_body(&text).unwrap();
    assert_eq!(
        to_json(&body),
        json!([[[["0.1", "-2.5", "3.75"], ["4.", ".5", "-6.0"]]]])
    );
}

#[test]
fn large_document_with_line_body() {
    let mut text = noise();
    text.push_str("The numbers 1 2 3 end\n");
    text.push_str(&noise());

    let body = body_only("~ @.numbers #!+.g ~").capture_body(&text).unwrap();
    assert_eq!(to_json(&body), json!([[["1", "2", "3"]]]));
}
