//! Storage adapters
//!
//! Implementations of the StorageProvider port.

pub mod disk;

pub use disk::DiskStorageProvider;
