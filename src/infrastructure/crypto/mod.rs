//! One-way hashing for user passwords

pub mod password;
