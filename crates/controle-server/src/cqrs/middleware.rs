//! Command/query markers
//!
//! A [`Command`] writes, and writes to tracked entities are audited.
//! A [`Query`] only reads and is never audited.

/// A request that mutates stored state
pub trait Command {}

/// A read-only request
pub trait Query {}
