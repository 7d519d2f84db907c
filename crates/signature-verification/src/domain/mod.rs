//! Pure domain logic: hashing, parsing, recovery, address formatting.

pub mod checksum;
pub mod entities;
pub mod errors;
pub mod personal;
pub mod recovery;
