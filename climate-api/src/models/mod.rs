mod alert;
mod problem;
mod reading;

pub use alert::*;
pub use problem::*;
pub use reading::*;
