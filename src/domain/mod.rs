mod date;
mod entry;
mod masters;
mod money;

pub use date::*;
pub use entry::*;
pub use masters::*;
pub use money::*;
