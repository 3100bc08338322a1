pub mod catalog;
pub mod store;

pub use catalog::CatalogStore;
pub use store::MemoryAccountStore;
