//! Hashing y canonicalización JSON (firma estable de definiciones de flujo).

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
