use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown directive: `.{0}`")]
    UnknownDirective(String),

    #[error("Unknown operation: `{0}`")]
    UnknownOperation(String),

    #[error("Syntax Error: Cannot parse `{0}`")]
    SyntaxError(String),

    #[error("More argument required")]
    MissingArgument,

    #[error("Cannot parse `{0}` as number")]
    ParseNumber(String),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Re-defined label: `{0}` (first defined at line {line})", line = .1 + 1)]
    RedefinedLabel(String, usize),

    #[error("Address out of range: 0x{0:X} is outside memory 0x0-0xF")]
    AddressOutOfRange(usize),

    #[error("Operand out of range: `{0}` is {1}, which does not fit in 4 bits")]
    OperandOutOfRange(String, usize),

    #[error("Byte out of range: `{0}` is {1}, which does not fit in 8 bits")]
    ByteOutOfRange(String, usize),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error tied to the source line (0-based) that caused it.
#[derive(Error, Debug)]
#[error("line {line}: {error}", line = .line_idx + 1)]
pub struct Diag {
    pub line_idx: usize,
    pub error: Error,
}

impl Diag {
    pub fn new(line_idx: usize, error: Error) -> Self {
        Diag { line_idx, error }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag<S: AsRef<str>>(&self, file: &str, lines: &[S]) {
        cprintln!("<red,bold>error</>: {}", self.error);

        let line_num = self.line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = lines
            .get(self.line_idx)
            .map(|s| s.as_ref())
            .unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}
