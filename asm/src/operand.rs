use crate::{error::Error, symbols::Symbols};

/// Prefix marking a hexadecimal literal, e.g. `$0a`.
pub const HEX_PREFIX: char = '$';

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(usize),
    Symbol(String),
}

impl Operand {
    /// A token starting with a digit or `$` is a number, anything else a symbol.
    pub fn parse(s: &str) -> Result<Operand, Error> {
        let s = s.trim();
        match s.chars().next() {
            None => Err(Error::MissingArgument),
            Some(head) if head.is_ascii_digit() || head == HEX_PREFIX => {
                parse_number(s).map(Operand::Literal)
            }
            Some(_) if s.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Ok(Operand::Symbol(s.to_string()))
            }
            Some(_) => Err(Error::SyntaxError(s.to_string())),
        }
    }

    pub fn resolve(&self, symbols: &Symbols) -> Result<usize, Error> {
        match self {
            Operand::Literal(v) => Ok(*v),
            Operand::Symbol(name) => symbols.resolve(name),
        }
    }
}

/// Parses a decimal literal, or a hexadecimal one prefixed with `$`.
pub fn parse_number(s: &str) -> Result<usize, Error> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::MissingArgument);
    }
    // Digits only: the integer parsers would also take a leading `+`.
    let (digits, radix) = match s.strip_prefix(HEX_PREFIX) {
        Some(hex) if hex.chars().all(|c| c.is_ascii_hexdigit()) => (hex, 16),
        None if s.chars().all(|c| c.is_ascii_digit()) => (s, 10),
        _ => return Err(Error::ParseNumber(s.to_string())),
    };
    usize::from_str_radix(digits, radix).map_err(|_| Error::ParseNumber(s.to_string()))
}

/// Splits a `.byte` operand into its comma-separated items.
///
/// The item count is the directive's footprint, so this only looks at the
/// shape of the text and never evaluates symbols.
pub fn list_items(s: &str) -> Result<Vec<&str>, Error> {
    if s.trim().is_empty() {
        return Err(Error::MissingArgument);
    }
    s.split(',')
        .map(str::trim)
        .map(|item| match item {
            "" => Err(Error::SyntaxError(s.trim().to_string())),
            item => Ok(item),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(parse_number("12").unwrap(), 12);
        assert_eq!(parse_number("$0a").unwrap(), 10);
        assert_eq!(parse_number(" $FF ").unwrap(), 255);
        assert!(matches!(parse_number("$"), Err(Error::ParseNumber(_))));
        assert!(matches!(parse_number("1f"), Err(Error::ParseNumber(_))));
        assert!(matches!(parse_number(""), Err(Error::MissingArgument)));
    }

    #[test]
    fn numbers_are_unsigned() {
        assert!(matches!(parse_number("+5"), Err(Error::ParseNumber(_))));
        assert!(matches!(parse_number("$+a"), Err(Error::ParseNumber(_))));
        assert!(matches!(parse_number("-1"), Err(Error::ParseNumber(_))));
        assert!(matches!(Operand::parse("$+a"), Err(Error::ParseNumber(_))));
    }

    #[test]
    fn operand_kind_follows_first_char() {
        assert_eq!(Operand::parse("7").unwrap(), Operand::Literal(7));
        assert_eq!(Operand::parse("$e").unwrap(), Operand::Literal(14));
        assert_eq!(
            Operand::parse("one").unwrap(),
            Operand::Symbol("one".to_string())
        );
        assert!(matches!(Operand::parse("a-b"), Err(Error::SyntaxError(_))));
    }

    #[test]
    fn items_by_shape() {
        assert_eq!(list_items("$0a, 3, label").unwrap(), vec!["$0a", "3", "label"]);
        assert_eq!(list_items("later").unwrap(), vec!["later"]);
        assert!(matches!(list_items("1,,2"), Err(Error::SyntaxError(_))));
        assert!(matches!(list_items("  "), Err(Error::MissingArgument)));
    }
}
