pub mod cpi;
pub mod math;
pub mod mint;

pub use cpi::*;
pub use math::*;
pub use mint::*;
