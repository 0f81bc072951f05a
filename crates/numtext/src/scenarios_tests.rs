//! End-to-end scenarios through the public API.

use indoc::indoc;
use serde_json::json;

use crate::{
    CaptureExt, CaptureList, Error, Extractor, Parser, Section, SectionField, Value, compile_lines,
};

fn to_json(list: &CaptureList) -> serde_json::Value {
    serde_json::to_value(list).unwrap()
}

const CI_STEP: &str = indoc! {"
    CI-STEP:
    Number of multiplicity blocks ...    2

    BLOCK  1 WEIGHT=   0.5000
      Multiplicity                       ...    3
      #(Config)                          ...   48
      #(CSFs)                            ...   48
      #(Roots)                           ...    2
        ROOT=0 WEIGHT=    0.500000
        ROOT=1 WEIGHT=    0.500000

    BLOCK  2 WEIGHT=   0.5000
      Multiplicity                       ...    1
      #(Config)                          ...   75
      #(CSFs)                            ...   75
      #(Roots)                           ...    1
        ROOT=0 WEIGHT=    1.000000
"};

fn ci_step_parser() -> Parser {
    let block = Parser::new(
        [
            "@.BLOCK #!.+i @.WEIGHT= #!..f",
            "@.Multiplicity @+. #!.+i",
            "@x.#(Config ~ @+. #!.+i",
            "@.#(CSFs) @+. #!.+i",
            "@.#(Roots) @+. #!.+i",
        ],
        "@x.ROOT= #o.+i @.WEIGHT= #!..f",
        "",
    )
    .unwrap();

    Parser::new(
        ["@.CI-STEP:", "~ '@.multiplicity blocks' @+. #!.+i", ""],
        block,
        Section::Absent,
    )
    .unwrap()
}

#[test]
fn nested_heads_and_bodies() {
    let records = ci_step_parser().capture_struct(CI_STEP).unwrap();

    assert_eq!(
        serde_json::to_value(records.field("head").unwrap()).unwrap(),
        json!([["2"]])
    );

    let blocks = records.field("body").unwrap().and_then(Value::as_array).unwrap();
    let heads: Vec<_> = blocks
        .iter()
        .map(|b| serde_json::to_value(b.section(SectionField::Head)).unwrap())
        .collect();
    assert_eq!(
        heads,
        [
            json!([["1", "0.5000", "3", "48", "48", "2"]]),
            json!([["2", "0.5000", "1", "75", "75", "1"]]),
        ]
    );
}

#[test]
fn nested_body_blocks() {
    let body = ci_step_parser().capture_body(CI_STEP).unwrap();
    assert_eq!(
        to_json(&body),
        json!([[[["0.500000"], ["0.500000"]], [["1.000000"]]]])
    );
}

#[test]
fn optional_only_body() {
    let parser = Parser::new("@.start", "? @.value #!..f", "@.stop").unwrap();

    let present = parser.capture_struct("start\nvalue 1.5\nstop").unwrap();
    assert_eq!(
        to_json(&present),
        json!([{"head": [[]], "body": [["1.5"]], "tail": [[]]}])
    );

    let absent = parser.capture_struct("start\nstop").unwrap();
    assert_eq!(absent.field("body").unwrap(), Some(&Value::Null));
    assert_eq!(to_json(&parser.capture_body("start\nstop").unwrap()), json!([null]));
}

#[test]
fn group_indices_increase_in_source_order() {
    let lines = compile_lines(
        &["@.a #!.+i #!.+i", "? ~! @.b", "#!+.f &!. #.+i #!..s"],
        true,
        0,
    )
    .unwrap();
    let indices: Vec<_> = lines.slots.iter().map(|s| s.index).collect();
    assert_eq!(indices, (0..6).collect::<Vec<_>>());

    let mut last = None;
    for index in 0..6 {
        let at = lines.regex.find(&format!("(?P<g{index}>")).unwrap();
        assert!(last < Some(at));
        last = Some(at);
    }
}

#[test]
fn pattern_is_stable() {
    let parser = ci_step_parser();
    let first = parser.pattern(true).unwrap();
    assert_eq!(first, parser.pattern(true).unwrap());
    assert_eq!(first, Extractor::new(&parser).unwrap().pattern());
}

#[test]
fn bad_description_fails_before_matching() {
    let err = Parser::new("@.ok", ["#.+i", "#!.+i ?"], Section::Absent).unwrap_err();
    assert!(matches!(err, Error::Line { .. }));

    let rendered = err.printer().render();
    assert!(rendered.contains("#!.+i ?"));
}

#[test]
fn unmatched_document_is_not_an_error() {
    let body = ci_step_parser().capture_body("nothing to see").unwrap();
    assert!(body.is_empty());
}
