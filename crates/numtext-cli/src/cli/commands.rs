//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Parser description args shared by every subcommand.
fn with_parser_args(cmd: Command) -> Command {
    cmd.arg(head_arg())
        .arg(body_arg())
        .arg(tail_arg())
        .arg(spec_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("numtext")
        .about("Extract numbers from text reports with a compact pattern language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(pattern_command())
        .subcommand(capture_command())
}

/// Print the compiled regex.
pub fn pattern_command() -> Command {
    let cmd = Command::new("pattern")
        .about("Print the regex a parser compiles to")
        .override_usage(
            "\
  numtext pattern [--head <LINE>]... --body <LINE>... [--tail <LINE>]...
  numtext pattern --spec <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  numtext pattern --head '@.$data' --body '#.+i #!+.f'
  numtext pattern --spec parser.json --bare"#,
        )
        .arg(bare_arg())
        .arg(color_arg());

    with_parser_args(cmd)
}

/// Capture a document as JSON.
pub fn capture_command() -> Command {
    let cmd = Command::new("capture")
        .about("Capture a document and print the result as JSON")
        .override_usage(
            "\
  numtext capture [--head <LINE>]... --body <LINE>... [--tail <LINE>]... <DOCUMENT>
  numtext capture --spec <FILE> <DOCUMENT>",
        )
        .after_help(
            r#"EXAMPLES:
  numtext capture --head '@.$data' --body '#.+i #!+.f' out.txt
  numtext capture --spec parser.json out.txt --struct
  cat out.txt | numtext capture --spec parser.json - --compact"#,
        )
        .arg(document_arg())
        .arg(struct_arg())
        .arg(compact_arg())
        .arg(backtrack_limit_arg())
        .arg(color_arg());

    with_parser_args(cmd)
}
