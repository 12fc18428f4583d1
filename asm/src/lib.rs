//! Two-pass assembler for the SAP-1 breadboard CPU.
//!
//! Source lines go through [`scan`], which binds labels and collects records,
//! then through [`encode`], which resolves symbols into a 16-byte [`Image`].

pub mod encode;
pub mod error;
pub mod image;
pub mod operand;
pub mod parser;
pub mod record;
pub mod scan;
pub mod symbols;
pub mod util;

pub use encode::encode;
pub use error::{Diag, Error};
pub use image::Image;
pub use scan::{scan, Records};
pub use symbols::Symbols;

/// Everything one run produces, kept for listings.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub symbols: Symbols,
    pub records: Records,
    pub image: Image,
}

pub fn assemble_full<S: AsRef<str>>(source: &[S]) -> Result<Assembly, Diag> {
    let (symbols, records) = scan(source)?;
    let image = encode(&symbols, &records)?;
    Ok(Assembly {
        symbols,
        records,
        image,
    })
}

/// Assembles source lines into a memory image.
pub fn assemble<S: AsRef<str>>(source: &[S]) -> Result<Image, Diag> {
    assemble_full(source).map(|assembly| assembly.image)
}
