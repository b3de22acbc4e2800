use clap::Parser as ClapParser;
use std::io;
use yamlq::cli::{self, CliError, FilterOptions, FilterOutcome};

#[derive(ClapParser)]
#[command(name = "yamlq")]
#[command(about = "yamlq - Filter a stream of YAML documents with a boolean query language")]
#[command(version)]
struct Cli {
    /// The query to evaluate against each document, e.g. "name == 'bob'"
    query: String,

    /// Only validate query syntax, don't read any input
    #[arg(long)]
    syntax_only: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = FilterOptions {
        query: cli.query,
        syntax_only: cli.syntax_only,
    };

    if !options.syntax_only && atty::is(atty::Stream::Stdin) {
        return Err(CliError::NoInput);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli::execute_filter(&options, stdin.lock(), stdout.lock())? {
        FilterOutcome::SyntaxValid => println!("Syntax is valid"),
        FilterOutcome::Matched(_) => {}
    }
    Ok(())
}
