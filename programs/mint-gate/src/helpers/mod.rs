pub mod cpi;
pub mod math;
pub mod public_values;

pub use cpi::*;
pub use math::*;
pub use public_values::*;
