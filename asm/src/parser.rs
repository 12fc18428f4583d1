use arch::op::Opcode;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::Error,
    record::{Directive, DirectiveCode, Instruction, Record},
};

pub const COMMENT: char = ';';

// Recognizers are tried in this order on each line. All are anchored at the start.
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]+):").unwrap());
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.([A-Za-z]+)(.*)$").unwrap());
static INSTRUCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)(?:\s+(\$?[0-9A-Za-z]+))?$").unwrap());

/// Drops the comment and surrounding whitespace.
pub fn clean(raw: &str) -> &str {
    match raw.split_once(COMMENT) {
        Some((code, _)) => code.trim(),
        None => raw.trim(),
    }
}

/// `name:` at the head of the line. Returns the name and the trimmed rest.
pub fn label(code: &str) -> Option<(&str, &str)> {
    let caps = LABEL.captures(code)?;
    let all = caps.get(0)?;
    let name = caps.get(1)?;
    Some((name.as_str(), code[all.end()..].trim()))
}

/// `.keyword operand...`. Returns the keyword and the trimmed rest.
pub fn directive(code: &str) -> Option<(&str, &str)> {
    let caps = DIRECTIVE.captures(code)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str().trim()))
}

/// `mnemonic [operand]`. The operand is empty when absent.
pub fn instruction(code: &str) -> Option<(&str, &str)> {
    let caps = INSTRUCTION.captures(code)?;
    let operand = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    Some((caps.get(1)?.as_str(), operand))
}

// ----------------------------------------------------------------------------
// Line

/// A non-empty source line: an optional label, then an optional record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: Option<String>,
    pub record: Option<Record>,
}

impl Line {
    /// Returns `Ok(None)` for blank and comment-only lines.
    pub fn parse(raw: &str) -> Result<Option<Line>, Error> {
        let code = clean(raw);
        if code.is_empty() {
            return Ok(None);
        }

        let (label, code) = match label(code) {
            Some((name, rest)) => (Some(name.to_string()), rest),
            None => (None, code),
        };

        let record = if code.is_empty() {
            None
        } else if let Some((keyword, operand)) = directive(code) {
            Some(Record::Directive(Directive {
                code: DirectiveCode::parse(keyword)?,
                operand: operand.to_string(),
            }))
        } else if let Some((mnemonic, operand)) = instruction(code) {
            let opcode = Opcode::parse(mnemonic)
                .map_err(|_| Error::UnknownOperation(mnemonic.to_string()))?;
            Some(Record::Instruction(Instruction {
                opcode,
                operand: operand.to_string(),
            }))
        } else {
            return Err(Error::SyntaxError(code.to_string()));
        };

        Ok(Some(Line { label, record }))
    }
}
