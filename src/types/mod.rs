pub mod market;
pub mod risk;
pub mod signal;

pub use market::*;
pub use risk::*;
pub use signal::*;
