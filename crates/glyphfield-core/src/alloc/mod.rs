//! Optimized collection types.
//!
//! Hash collections here use AHash. Lookups on the font registry are keyed by
//! small structured keys, where AHash beats SipHash comfortably.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet};
