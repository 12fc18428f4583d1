use arch::{inst::Inst, MEMORY_SIZE};
use color_print::cformat;

use crate::{record::Record, Assembly};

/// Listing of every memory cell with the line that produced it, then the symbols.
pub fn dump<S: AsRef<str>>(source: &[S], assembly: &Assembly) -> Vec<String> {
    let rule = format!("{}+{}", "-".repeat(19), "-".repeat(53));
    let mut out = vec![rule.clone()];

    for addr in 0..MEMORY_SIZE {
        let byte = assembly.image.bytes()[addr];
        let line_idx = assembly.image.source_line(addr);

        // Only cells written by an instruction are disassembled.
        let decoded = match (line_idx, Inst::from_bin(byte)) {
            (Some(idx), Some(inst)) if is_instruction(assembly, idx) => inst.cformat(),
            _ => " ".repeat(7),
        };

        let origin = match line_idx {
            Some(idx) => {
                let raw = source.get(idx).map(|s| s.as_ref()).unwrap_or("");
                format!("{:>4}: {}", idx + 1, raw.trim_end())
            }
            None => String::new(),
        };

        out.push(cformat!(
            "[<green>{:X}</>] <yellow>{:02X}</> {}     | {}",
            addr,
            byte,
            decoded,
            origin
        ));
    }

    out.push(rule.clone());
    if assembly.symbols.is_empty() {
        return out;
    }
    for (name, line_idx, addr) in assembly.symbols.iter() {
        out.push(cformat!(
            "<g>{:<14}</>0x{:X} | {:>4}",
            format!("{}:", name),
            addr,
            line_idx + 1
        ));
    }
    out.push(rule);
    out
}

pub fn print_dump<S: AsRef<str>>(source: &[S], assembly: &Assembly) {
    for line in dump(source, assembly) {
        println!("{}", line);
    }
}

fn is_instruction(assembly: &Assembly, line_idx: usize) -> bool {
    assembly
        .records
        .iter()
        .any(|(idx, record)| *idx == line_idx && matches!(record, Record::Instruction(_)))
}
