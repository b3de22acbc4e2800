//! Reading and writing `---`-delimited YAML document streams.
//!
//! The reader splits its input on sentinel lines, buffers each document's
//! raw text verbatim, and decodes it into a [`Value`] tree. The writer
//! emits a matched record's raw text untouched, followed by a sentinel
//! line. Neither side reformats document content.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use num_bigint::BigInt;

use crate::value::Value;

/// The line that separates documents in the input and output streams.
pub const DOCUMENT_DELIMITER: &str = "---";

/// One unit of input: a decoded document plus its original raw text.
///
/// The raw text is opaque to the query core and passed through untouched
/// when the record matches.
#[derive(Debug, Clone)]
pub struct Record {
    /// The decoded document tree
    pub value: Value,
    /// The document's raw text, line endings intact
    pub raw: String,
}

/// Errors that can occur while reading the document stream.
#[derive(Debug)]
pub enum ReadError {
    /// Underlying I/O failure
    Io(io::Error),
    /// Document block that does not decode as YAML
    Decode(serde_yaml::Error),
    /// Mapping key that is itself a sequence or mapping
    NonScalarKey,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "IO error: {}", e),
            ReadError::Decode(e) => write!(f, "invalid YAML document: {}", e),
            ReadError::NonScalarKey => {
                write!(f, "invalid YAML document: mapping key is not a scalar")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::Decode(e) => Some(e),
            ReadError::NonScalarKey => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

impl From<serde_yaml::Error> for ReadError {
    fn from(e: serde_yaml::Error) -> Self {
        ReadError::Decode(e)
    }
}

/// Iterator over the records of a delimited document stream.
///
/// Input before the first sentinel line is skipped. Each subsequent run of
/// lines up to the next sentinel (or end of input) is one document; a final
/// document not followed by a sentinel is still a record. A line counts as
/// a sentinel when its whitespace-trimmed content is exactly
/// [`DOCUMENT_DELIMITER`].
pub struct RecordReader<R> {
    reader: R,
    in_stream: bool,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        RecordReader {
            reader,
            in_stream: false,
            done: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Skip everything up to the first sentinel line. Returns false when
    /// the input ends before any sentinel is seen.
    fn skip_preamble(&mut self) -> io::Result<bool> {
        loop {
            match self.read_line()? {
                None => return Ok(false),
                Some(line) if line.trim() == DOCUMENT_DELIMITER => return Ok(true),
                Some(_) => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.in_stream {
            match self.skip_preamble() {
                Ok(true) => self.in_stream = true,
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ReadError::Io(e)));
                }
            }
        }

        let mut raw = String::new();
        loop {
            match self.read_line() {
                Ok(Some(line)) if line.trim() == DOCUMENT_DELIMITER => break,
                Ok(Some(line)) => raw.push_str(&line),
                Ok(None) => {
                    self.done = true;
                    if raw.is_empty() {
                        return None;
                    }
                    break;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ReadError::Io(e)));
                }
            }
        }

        Some(decode_document(raw))
    }
}

fn decode_document(raw: String) -> Result<Record, ReadError> {
    // An empty block is a null document.
    if raw.trim().is_empty() {
        return Ok(Record {
            value: Value::Null,
            raw,
        });
    }
    let doc: serde_yaml::Value = serde_yaml::from_str(&raw)?;
    let value = yaml_to_value(doc)?;
    Ok(Record { value, raw })
}

/// Convert a decoded `serde_yaml::Value` tree into a [`Value`] tree.
///
/// Kinds map 1:1. Integers that fit a signed or unsigned 64-bit word
/// become `Integer`; any other number becomes `Float`. Scalar mapping keys
/// are rendered as their string form; a collection used as a key is an
/// error. Tagged values decode as their inner value.
pub fn yaml_to_value(v: serde_yaml::Value) -> Result<Value, ReadError> {
    match v {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Boolean(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(BigInt::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Integer(BigInt::from(u)))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(seq) => Ok(Value::Sequence(
            seq.into_iter()
                .map(yaml_to_value)
                .collect::<Result<_, _>>()?,
        )),
        serde_yaml::Value::Mapping(map) => {
            let mut out = HashMap::with_capacity(map.len());
            for (key, value) in map {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Null => "null".to_string(),
                    _ => return Err(ReadError::NonScalarKey),
                };
                out.insert(key, yaml_to_value(value)?);
            }
            Ok(Value::Mapping(out))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value),
    }
}

/// Write one matched record: its raw text untouched, then a sentinel line.
///
/// A newline is inserted before the sentinel only when the raw text does
/// not already end with one, so the sentinel always sits on its own line.
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    out.write_all(record.raw.as_bytes())?;
    if !record.raw.is_empty() && !record.raw.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    writeln!(out, "{}", DOCUMENT_DELIMITER)
}
