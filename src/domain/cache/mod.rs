//! Content-addressed cache for generated topic items

pub mod address;
pub mod entry;
pub mod repository;

pub use address::CacheAddress;
pub use entry::CacheEntry;
pub use repository::CacheRepository;
