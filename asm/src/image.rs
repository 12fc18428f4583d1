use arch::MEMORY_SIZE;

use crate::error::Error;

/// The assembled memory, plus which source line wrote each cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    bytes: [u8; MEMORY_SIZE],
    lines: [Option<usize>; MEMORY_SIZE],
}

impl Default for Image {
    fn default() -> Self {
        Image {
            bytes: [0; MEMORY_SIZE],
            lines: [None; MEMORY_SIZE],
        }
    }
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later writes to the same cell replace earlier ones.
    pub fn write(&mut self, addr: usize, byte: u8, line_idx: usize) -> Result<(), Error> {
        let cell = self
            .bytes
            .get_mut(addr)
            .ok_or(Error::AddressOutOfRange(addr))?;
        *cell = byte;
        self.lines[addr] = Some(line_idx);
        Ok(())
    }

    pub fn bytes(&self) -> &[u8; MEMORY_SIZE] {
        &self.bytes
    }

    pub fn source_line(&self, addr: usize) -> Option<usize> {
        self.lines.get(addr).copied().flatten()
    }

    /// `00 05 1f ...`
    pub fn to_hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
