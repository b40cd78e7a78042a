mod docs_handle;
mod reading_handle;

pub use docs_handle::*;
pub use reading_handle::*;
