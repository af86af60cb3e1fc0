pub mod signals;
pub mod trading;

pub use signals::*;
pub use trading::*;
