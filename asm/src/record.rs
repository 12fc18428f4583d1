use arch::op::Opcode;
use strum::{Display, EnumString};

use crate::{
    error::Error,
    operand::{list_items, parse_number},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DirectiveCode {
    Org,
    Segment,
    Byte,
}

impl DirectiveCode {
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse::<Self>()
            .map_err(|_| Error::UnknownDirective(s.to_string()))
    }
}

/// Operand text is the rest of the line after the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub code: DirectiveCode,
    pub operand: String,
}

/// Operand text may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: String,
}

/// A parsed line, handed from the scanner to the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Directive(Directive),
    Instruction(Instruction),
}

/// How a record moves the program counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stay,
    Advance(usize),
    Jump(usize),
}

impl Step {
    /// Advancing past `usize::MAX` is reported as an out-of-range address.
    pub fn apply(self, pc: usize) -> Result<usize, Error> {
        match self {
            Step::Stay => Ok(pc),
            Step::Advance(n) => pc.checked_add(n).ok_or(Error::AddressOutOfRange(pc)),
            Step::Jump(addr) => Ok(addr),
        }
    }
}

impl Record {
    /// Footprint of the record. Both passes move `pc` through this alone.
    pub fn step(&self) -> Result<Step, Error> {
        match self {
            Record::Directive(directive) => match directive.code {
                DirectiveCode::Segment => Ok(Step::Stay),
                DirectiveCode::Org => Ok(Step::Jump(parse_number(&directive.operand)?)),
                DirectiveCode::Byte => Ok(Step::Advance(list_items(&directive.operand)?.len())),
            },
            // One byte each; the operand shares it.
            Record::Instruction(_) => Ok(Step::Advance(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(code: DirectiveCode, operand: &str) -> Record {
        Record::Directive(Directive {
            code,
            operand: operand.to_string(),
        })
    }

    #[test]
    fn directive_keywords() {
        assert_eq!(DirectiveCode::parse("org").unwrap(), DirectiveCode::Org);
        assert_eq!(DirectiveCode::parse("BYTE").unwrap(), DirectiveCode::Byte);
        assert_eq!(DirectiveCode::parse("Segment").unwrap(), DirectiveCode::Segment);
        assert!(matches!(
            DirectiveCode::parse("word"),
            Err(Error::UnknownDirective(_))
        ));
    }

    #[test]
    fn footprints() {
        let inst = Record::Instruction(Instruction {
            opcode: Opcode::HLT,
            operand: String::new(),
        });
        assert_eq!(inst.step().unwrap().apply(3).unwrap(), 4);
        assert_eq!(directive(DirectiveCode::Segment, "CODE").step().unwrap(), Step::Stay);
        assert_eq!(directive(DirectiveCode::Org, "$c").step().unwrap().apply(3).unwrap(), 12);
        assert_eq!(directive(DirectiveCode::Org, "1").step().unwrap().apply(9).unwrap(), 1);
        assert_eq!(directive(DirectiveCode::Byte, "1, 2, x").step().unwrap(), Step::Advance(3));
        assert_eq!(directive(DirectiveCode::Byte, "later").step().unwrap(), Step::Advance(1));
    }

    #[test]
    fn advance_past_end_of_address_space() {
        assert!(matches!(
            Step::Advance(1).apply(usize::MAX),
            Err(Error::AddressOutOfRange(usize::MAX))
        ));
        assert_eq!(Step::Jump(usize::MAX).apply(0).unwrap(), usize::MAX);
    }

    #[test]
    fn org_needs_number() {
        assert!(matches!(
            directive(DirectiveCode::Org, "start").step(),
            Err(Error::ParseNumber(_))
        ));
        assert!(matches!(
            directive(DirectiveCode::Org, "").step(),
            Err(Error::MissingArgument)
        ));
    }
}
