pub mod gate_config;
pub mod proof_mint;
pub mod whitelist_entry;

pub use gate_config::*;
pub use proof_mint::*;
pub use whitelist_entry::*;
