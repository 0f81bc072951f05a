use super::loader::{CliError, ParserArgs, load_parser};

pub struct PatternArgs {
    pub parser: ParserArgs,
    pub bare: bool,
    pub color: bool,
}

pub fn run(args: PatternArgs) {
    match pattern(&args) {
        Ok(pattern) => println!("{pattern}"),
        Err(e) => {
            eprintln!("{}", e.render(args.color));
            std::process::exit(1);
        }
    }
}

pub fn pattern(args: &PatternArgs) -> Result<String, CliError> {
    let parser = load_parser(&args.parser)?;
    Ok(parser.pattern(!args.bare)?)
}
