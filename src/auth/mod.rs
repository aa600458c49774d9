//! Credential handling.
//!
//! Only password hashing lives here today. There is no login or session
//! machinery; the favorite routes act for a fixed default user. Hashing at
//! the storage boundary means nothing above the repositories ever handles a
//! plaintext password that is about to be persisted.

pub mod password;
