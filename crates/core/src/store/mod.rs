//! Key-value persistence port
//!
//! Every collection in the system is serialized as a JSON document under a
//! fixed string key (see `cobrix_domain::constants`). This port is the only
//! boundary the repositories cross; swapping the backing store (SQLite,
//! in-memory, file) never touches business logic.

pub mod ports;

pub use ports::KeyValueStore;
