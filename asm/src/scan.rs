use crate::{
    error::{Diag, Error},
    parser::Line,
    record::Record,
    symbols::Symbols,
};

/// Records in source order, each with the index of the line it came from.
pub type Records = Vec<(usize, Record)>;

/// First pass: binds every label to the `pc` at its line and collects records.
pub fn scan<S: AsRef<str>>(source: &[S]) -> Result<(Symbols, Records), Diag> {
    let mut pc: usize = 0;
    let mut symbols = Symbols::new();
    let mut records = vec![];

    for (idx, raw) in source.iter().enumerate() {
        let at = move |error: Error| Diag::new(idx, error);

        let Some(line) = Line::parse(raw.as_ref()).map_err(at)? else {
            continue;
        };

        if let Some(label) = &line.label {
            symbols.define(label, idx, pc).map_err(at)?;
        }

        if let Some(record) = line.record {
            pc = record.step().and_then(|step| step.apply(pc)).map_err(at)?;
            records.push((idx, record));
        }
    }

    Ok((symbols, records))
}
