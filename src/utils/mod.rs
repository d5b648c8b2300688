// Utils compartidos

pub mod constants;
pub mod validation;

pub use constants::*;
