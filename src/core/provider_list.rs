use crate::core::errors::{Error, InputError, Result};
use crate::core::provider::{parse_as_number, Provider};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

/*-------------------------------------------------------------------------------------------------
  Provider List
-------------------------------------------------------------------------------------------------*/

/// Default provider list file name, relative to the working directory.
pub const DEFAULT_PROVIDER_LIST_FILE: &str = "hosting-providers-source.txt";

/// An ordered list of [Provider] records backed by a text file.
///
/// The file holds a bracketed list of `(name, as_number)` tuples, one record per line:
///
/// ```text
/// [
/// ('acme', 64500),
/// ('example-hosting', 64501)
/// ]
/// ```
///
/// The file is parsed with an explicit grammar; single- or double-quoted names, blank
/// lines and a trailing comma are accepted. AS numbers must be unique across the list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProviderList {
    records: Vec<Record>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Record {
    provider: Provider,
    line: usize,
}

impl ProviderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a provider list from a file. A missing or blank file is an empty list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let list = Self::parse(&content)?;
                debug!("Loaded {} provider(s) from {:?}", list.len(), path);
                Ok(list)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("Provider list {:?} not found; starting empty", path);
                Ok(Self::new())
            }
            Err(error) => Err(Error::from(error)),
        }
    }

    /// Parse the textual provider list format.
    pub fn parse(content: &str) -> Result<Self> {
        let records = Parser::new(content).parse_list()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.records.iter().map(|record| &record.provider)
    }

    pub fn into_providers(self) -> Vec<Provider> {
        self.records.into_iter().map(|record| record.provider).collect()
    }

    /// 1-based file line of the record holding `as_number`, if any.
    pub fn find_as_number(&self, as_number: u32) -> Option<usize> {
        self.records
            .iter()
            .find(|record| record.provider.as_number() == as_number)
            .map(|record| record.line)
    }

    /// Append a provider. Fails with [InputError::DuplicateAsNumber], leaving the list
    /// unchanged, when the AS number is already present.
    pub fn append(&mut self, provider: Provider) -> Result<()> {
        if let Some(line) = self.find_as_number(provider.as_number()) {
            return Err(InputError::DuplicateAsNumber {
                as_number: provider.as_number(),
                line,
            }
            .into());
        }

        // Record `i` of a saved list is on line `i + 2`; the `[` is line 1.
        let line = self.records.len() + 2;
        self.records.push(Record { provider, line });
        Ok(())
    }

    /// Rewrite the whole file with the canonical one-record-per-line layout.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())
            .inspect(|_| debug!("Wrote {} provider(s) to {:?}", self.len(), path))
            .map_err(Error::from)?;

        for (index, record) in self.records.iter_mut().enumerate() {
            record.line = index + 2;
        }
        Ok(())
    }
}

impl fmt::Display for ProviderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        let last = self.records.len().saturating_sub(1);
        for (index, record) in self.records.iter().enumerate() {
            if index < last {
                writeln!(f, "{},", record.provider)?;
            } else {
                writeln!(f, "{}", record.provider)?;
            }
        }
        writeln!(f, "]")
    }
}

/*--------------------------------------------------------------------------------------
  Add Provider
--------------------------------------------------------------------------------------*/

/// Load the provider list at `path`, append `provider` and rewrite the file. Nothing is
/// written when the AS number is already present.
pub fn add_provider<P: AsRef<Path>>(path: P, provider: Provider) -> Result<ProviderList> {
    let path = path.as_ref();
    let mut list = ProviderList::load(path)?;
    list.append(provider)?;
    list.save(path)?;
    Ok(list)
}

/*-------------------------------------------------------------------------------------------------
  Parser
-------------------------------------------------------------------------------------------------*/

/*
    file    := ws ( '[' ws ( record ( ws ',' ws record )* ( ws ',' )? )? ws ']' )? ws
    record  := '(' ws string ws ',' ws integer ws ')'
    string  := "'" chars "'" | '"' chars '"'
    integer := [0-9]+
*/

struct Parser<'s> {
    chars: Peekable<Chars<'s>>,
    line: usize,
}

impl<'s> Parser<'s> {
    fn new(content: &'s str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        self.skip_whitespace();
        if self.chars.peek().is_none() {
            return Ok(records);
        }
        self.expect('[', "provider list must be a bracketed list of tuples")?;

        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some(']') => {
                    self.next();
                    break;
                }
                Some('(') => records.push(self.parse_record()?),
                Some(&c) => return Err(self.error(format!("expected '(' or ']', found {c:?}"))),
                None => return Err(self.error("unterminated list; expected ']'")),
            }

            self.skip_whitespace();
            match self.next() {
                Some(',') => continue,
                Some(']') => break,
                Some(c) => return Err(self.error(format!("expected ',' or ']', found {c:?}"))),
                None => return Err(self.error("unterminated list; expected ']'")),
            }
        }

        self.skip_whitespace();
        if let Some(&c) = self.chars.peek() {
            let reason = format!("unexpected {c:?} after the closing ']'");
            return Err(self.error(reason));
        }

        Ok(records)
    }

    fn parse_record(&mut self) -> Result<Record> {
        let line = self.line;
        self.expect('(', "expected '(' to start a record")?;

        self.skip_whitespace();
        let name = self.parse_string()?;

        self.skip_whitespace();
        self.expect(',', "expected ',' between name and AS number")?;

        self.skip_whitespace();
        let as_number = self.parse_integer()?;

        self.skip_whitespace();
        match self.next() {
            Some(')') => {}
            Some(',') => {
                return Err(self.error("record must be a 2-tuple (name, AS number)"));
            }
            Some(c) => return Err(self.error(format!("expected ')', found {c:?}"))),
            None => return Err(self.error("unterminated record; expected ')'")),
        }

        let provider = parse_as_number(&as_number)
            .and_then(|as_number| Provider::new(&name, as_number))
            .map_err(|error| -> Error {
                InputError::MalformedProviderList {
                    line,
                    reason: error.to_string(),
                }
                .into()
            })?;

        Ok(Record { provider, line })
    }

    fn parse_string(&mut self) -> Result<String> {
        let quote = match self.next() {
            Some(quote @ ('\'' | '"')) => quote,
            _ => return Err(self.error("provider name must be a quoted string")),
        };

        let mut value = String::new();
        loop {
            match self.next() {
                Some(c) if c == quote => break,
                Some('\n') | None => return Err(self.error("unterminated string")),
                Some(c) => value.push(c),
            }
        }
        Ok(value)
    }

    fn parse_integer(&mut self) -> Result<String> {
        let mut digits = String::new();
        while let Some(c) = self.chars.peek().copied() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.next();
        }

        if digits.is_empty() {
            return Err(self.error("AS number must be a positive integer"));
        }
        Ok(digits)
    }

    /*-------------------------------------------------------------------------
      Character Helpers
    -------------------------------------------------------------------------*/

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.next();
        }
    }

    fn expect(&mut self, expected: char, reason: &str) -> Result<()> {
        match self.next() {
            Some(c) if c == expected => Ok(()),
            _ => Err(self.error(reason)),
        }
    }

    fn error<S: Into<String>>(&self, reason: S) -> Error {
        InputError::MalformedProviderList {
            line: self.line,
            reason: reason.into(),
        }
        .into()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
