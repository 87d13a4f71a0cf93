//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (score value objects, errors)
//! - `bias` - Phrase catalog, the three lean signals, aggregation and flagging
//!
//! Everything here is synchronous and free of I/O apart from catalog file loading.

pub mod bias;
pub mod foundation;
