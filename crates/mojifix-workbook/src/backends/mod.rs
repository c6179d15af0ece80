pub mod memory;
pub mod umya;

pub use memory::{MemoryCell, MemoryError, MemoryWorkbook};
pub use umya::UmyaWorkbook;
