use crate::op::Opcode;

use color_print::cformat;

/// One encoded instruction: opcode in the high nibble, operand in the low one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inst {
    op: Opcode,
    operand: u8,
}

impl Inst {
    pub const OPERAND_MAX: u8 = 0x0F;

    /// Returns `None` when the operand does not fit in 4 bits.
    /// Operand-less operations drop the operand.
    pub fn new(op: Opcode, operand: u8) -> Option<Inst> {
        if operand > Self::OPERAND_MAX {
            return None;
        }
        let operand = if op.has_operand() { operand } else { 0 };
        Some(Inst { op, operand })
    }

    pub fn to_bin(self) -> u8 {
        self.op.code() << 4 | self.operand
    }

    /// Decodes a memory cell. Unassigned opcodes yield `None`.
    pub fn from_bin(bin: u8) -> Option<Inst> {
        let op = Opcode::try_from(bin >> 4).ok()?;
        Inst::new(op, bin & Self::OPERAND_MAX)
    }

    pub fn cformat(&self) -> String {
        if self.op.has_operand() {
            cformat!("<red>{:<4}</><blue>0x{:X}</>", self.op.to_string(), self.operand)
        } else {
            cformat!("<red>{:<4}</>   ", self.op.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(Inst::new(Opcode::LDA, 5).map(Inst::to_bin), Some(0x15));
        assert_eq!(Inst::new(Opcode::JMP, 0xF).map(Inst::to_bin), Some(0x6F));
        assert_eq!(Inst::new(Opcode::HLT, 7).map(Inst::to_bin), Some(0xF0));
        assert_eq!(Inst::new(Opcode::ADD, 16), None);
    }

    #[test]
    fn decode() {
        assert_eq!(Inst::from_bin(0x24), Inst::new(Opcode::ADD, 4));
        assert_eq!(Inst::from_bin(0xE3), Inst::new(Opcode::OUT, 0));
        assert_eq!(Inst::from_bin(0x9A), None);
    }
}
