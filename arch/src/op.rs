use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumString};

/// Operations of the CPU. The discriminant is the 4-bit opcode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, EnumString, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Opcode {
    NOP = 0x0,
    LDA = 0x1,
    ADD = 0x2,
    SUB = 0x3,
    STA = 0x4,
    LDI = 0x5,
    JMP = 0x6,
    JC = 0x7,
    JZ = 0x8,
    OUT = 0xE,
    HLT = 0xF,
}

impl Opcode {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(op) => Ok(op),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }

    /// Whether the low nibble of the instruction carries an operand.
    pub fn has_operand(&self) -> bool {
        !matches!(self, Opcode::NOP | Opcode::OUT | Opcode::HLT)
    }

    pub fn code(self) -> u8 {
        self.into()
    }
}
