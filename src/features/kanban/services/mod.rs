pub mod dialogs;
pub mod highlight;

pub use dialogs::*;
pub use highlight::*;
