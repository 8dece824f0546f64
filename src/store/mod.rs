mod error;
mod in_memory;
mod json_file;
mod traits;

pub use error::StoreError;
pub use in_memory::{InMemoryCatalogStore, InMemoryOrderStore};
pub use json_file::JsonFileStore;
pub use traits::{CatalogStore, OrderStore};
