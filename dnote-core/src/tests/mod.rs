mod common;

pub use common::{fixed_moment, mk_config};
pub use memory_vault::{MemoryVault, Op};
