pub mod stake_pool;
pub mod stake_position;

pub use stake_pool::*;
pub use stake_position::*;
