//! Execute yamlq queries against a delimited YAML document stream

use std::io::{BufRead, Write};

use super::CliError;
use crate::{
    evaluator,
    stream::{write_record, RecordReader},
    Lexer, Parser,
};

/// Options for a filter run
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// The query to evaluate against each document
    pub query: String,
    /// Only validate query syntax, don't read any input
    pub syntax_only: bool,
}

/// Result of a filter run
#[derive(Debug)]
pub enum FilterOutcome {
    /// Syntax validation passed
    SyntaxValid,
    /// The stream was filtered; holds the number of matched documents
    Matched(usize),
}

/// Parse the query once, then stream records through it.
///
/// Matched records are written to `output` in input order, each followed by
/// a delimiter line. A malformed query fails before any input is read. A
/// decode failure or a path-index failure aborts the run; neither is
/// downgraded to "record does not match".
pub fn execute_filter<R: BufRead, W: Write>(
    options: &FilterOptions,
    input: R,
    mut output: W,
) -> Result<FilterOutcome, CliError> {
    let lexer = Lexer::new(&options.query);
    let mut parser = Parser::new(lexer)?;
    let root = parser.parse()?;

    if options.syntax_only {
        return Ok(FilterOutcome::SyntaxValid);
    }

    let mut matched = 0;
    for record in RecordReader::new(input) {
        let record = record?;
        if evaluator::matches(&root, &record.value)? {
            write_record(&mut output, &record).map_err(CliError::Io)?;
            matched += 1;
        }
    }
    Ok(FilterOutcome::Matched(matched))
}
