use arch::inst::Inst;

use crate::{
    error::{Diag, Error},
    image::Image,
    operand::{list_items, Operand},
    record::{DirectiveCode, Instruction, Record},
    symbols::Symbols,
};

/// Second pass: resolves symbols and writes every record into the image.
pub fn encode(symbols: &Symbols, records: &[(usize, Record)]) -> Result<Image, Diag> {
    let mut pc: usize = 0;
    let mut image = Image::new();

    for (idx, record) in records {
        let at = |error: Error| Diag::new(*idx, error);

        match record {
            Record::Directive(directive) => match directive.code {
                DirectiveCode::Org | DirectiveCode::Segment => {}
                DirectiveCode::Byte => {
                    let items = list_items(&directive.operand).map_err(at)?;
                    for (offset, item) in items.into_iter().enumerate() {
                        let byte = encode_byte(item, symbols).map_err(at)?;
                        let addr = pc
                            .checked_add(offset)
                            .ok_or(Error::AddressOutOfRange(pc))
                            .map_err(at)?;
                        image.write(addr, byte, *idx).map_err(at)?;
                    }
                }
            },
            Record::Instruction(inst) => {
                let byte = encode_inst(inst, symbols).map_err(at)?;
                image.write(pc, byte, *idx).map_err(at)?;
            }
        }

        pc = record.step().and_then(|step| step.apply(pc)).map_err(at)?;
    }

    Ok(image)
}

fn encode_byte(item: &str, symbols: &Symbols) -> Result<u8, Error> {
    let value = Operand::parse(item)?.resolve(symbols)?;
    u8::try_from(value).map_err(|_| Error::ByteOutOfRange(item.to_string(), value))
}

fn encode_inst(inst: &Instruction, symbols: &Symbols) -> Result<u8, Error> {
    if !inst.opcode.has_operand() {
        return Ok(inst.opcode.code() << 4);
    }
    let value = Operand::parse(&inst.operand)?.resolve(symbols)?;
    u8::try_from(value)
        .ok()
        .and_then(|operand| Inst::new(inst.opcode, operand))
        .map(Inst::to_bin)
        .ok_or_else(|| Error::OperandOutOfRange(inst.operand.clone(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;

    fn run(source: &[&str]) -> Result<Image, Diag> {
        let (symbols, records) = scan(source)?;
        encode(&symbols, &records)
    }

    #[test]
    fn forward_and_backward_references() {
        let image = run(&["top: jmp end", "     nop", "end: jz top"]).unwrap();
        assert_eq!(image.bytes()[..3], [0x62, 0x00, 0x80]);
    }

    #[test]
    fn writes_follow_scanned_addresses() {
        let image = run(&[".org 3", "ldi 1", ".byte 7, 8", ".org 12", "hlt"]).unwrap();
        assert_eq!(image.source_line(3), Some(1));
        assert_eq!(image.source_line(4), Some(2));
        assert_eq!(image.source_line(5), Some(2));
        assert_eq!(image.source_line(12), Some(4));
        assert_eq!(image.bytes()[3..6], [0x51, 0x07, 0x08]);
        assert_eq!(image.bytes()[12], 0xF0);
    }

    #[test]
    fn operand_less_ignores_token() {
        let image = run(&["hlt junk", "out 9"]).unwrap();
        assert_eq!(image.bytes()[..2], [0xF0, 0xE0]);
    }

    #[test]
    fn missing_operand() {
        let diag = run(&["nop", "lda"]).unwrap_err();
        assert_eq!(diag.line_idx, 1);
        assert!(matches!(diag.error, Error::MissingArgument));
    }

    #[test]
    fn operand_too_wide() {
        let diag = run(&["ldi 16"]).unwrap_err();
        assert!(matches!(diag.error, Error::OperandOutOfRange(_, 16)));

        let diag = run(&[".byte 256"]).unwrap_err();
        assert!(matches!(diag.error, Error::ByteOutOfRange(_, 256)));
    }

    #[test]
    fn undefined_symbol() {
        let diag = run(&["nop", ".byte 1, nowhere"]).unwrap_err();
        assert_eq!(diag.line_idx, 1);
        assert!(matches!(diag.error, Error::UndefinedLabel(name) if name == "nowhere"));
    }

    #[test]
    fn overflow() {
        let diag = run(&[".org 14", ".byte 1, 2, 3"]).unwrap_err();
        assert!(matches!(diag.error, Error::AddressOutOfRange(16)));

        let diag = run(&[".org $10", "nop"]).unwrap_err();
        assert!(matches!(diag.error, Error::AddressOutOfRange(16)));
    }
}
