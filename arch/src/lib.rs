pub mod inst;
pub mod op;

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 16;
