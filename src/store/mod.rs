//! Ledger storage: the persistence boundary and its backends.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryLedger;
pub use sqlite::SqliteLedger;
pub use traits::{LedgerStore, StorageError, StoreResult};
