pub mod artifacts;
pub mod console;
pub mod in_memory;
