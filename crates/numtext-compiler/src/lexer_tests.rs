use crate::Error;
use crate::lexer::split_line;

fn snapshot(line: &str) -> String {
    let mut out = String::new();
    for token in split_line(line).unwrap() {
        out.push_str(&format!("{:?} {:?}\n", token.span, token.text));
    }
    out
}

#[test]
fn splits_on_blanks() {
    insta::assert_snapshot!(snapshot("~ @.has &!. ~"), @r#"
    0..1 "~"
    2..7 "@.has"
    8..11 "&!."
    12..13 "~"
    "#);
}

#[test]
fn leading_and_trailing_blanks_ignored() {
    insta::assert_snapshot!(snapshot("  \t#!.+i   "), @r##"
    3..8 "#!.+i"
    "##);
}

#[test]
fn double_quotes_keep_spaces() {
    insta::assert_snapshot!(snapshot(r#""@.two words" #..f"#), @r##"
    0..13 "@.two words"
    14..18 "#..f"
    "##);
}

#[test]
fn single_quotes_are_literal() {
    insta::assert_snapshot!(snapshot(r"'@.a \ b'"), @r#"
    0..9 "@.a \\ b"
    "#);
}

#[test]
fn adjacent_fragments_join() {
    insta::assert_snapshot!(snapshot(r#"@."two words"x"#), @r#"
    0..14 "@.two wordsx"
    "#);
}

#[test]
fn backslash_escapes_blank() {
    insta::assert_snapshot!(snapshot(r"@.a\ b @.c"), @r#"
    0..6 "@.a b"
    7..10 "@.c"
    "#);
}

#[test]
fn double_quote_escapes() {
    let tokens = split_line(r#""@.say \"hi\" \n""#).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, r#"@.say "hi" \n"#);
}

#[test]
fn empty_line_has_no_tokens() {
    assert!(split_line("").unwrap().is_empty());
    assert!(split_line(" \t ").unwrap().is_empty());
}

#[test]
fn unterminated_quote_is_line_error() {
    let err = split_line(r#"@.ok "@.open"#).unwrap_err();
    let Error::Line { reason, location } = err else {
        panic!("expected line error, got {err:?}");
    };
    assert_eq!(reason, "unterminated quote");
    assert_eq!(location.span.start, 5);
}

#[test]
fn dangling_escape_is_line_error() {
    let err = split_line(r"@.ok \").unwrap_err();
    assert!(matches!(err, Error::Line { ref reason, .. } if reason == "dangling escape"));
}
