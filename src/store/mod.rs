//! Record persistence behind the creation dialogs

mod memory;
mod traits;

pub use memory::InMemoryStore;
pub use traits::RecordStore;

#[cfg(test)]
pub use traits::MockRecordStore;
