// Utils compartidos

pub mod format;
pub mod pagination;
pub mod storage;

pub use format::*;
pub use pagination::*;
pub use storage::*;
