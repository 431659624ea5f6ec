//! Command/query separation
//!
//! Every command and query type implements `mediator::Request` with the result
//! type of its slice's `handle` function, and carries a [`middleware::Command`]
//! or [`middleware::Query`] marker. Routes call `handle` directly with the pool.

pub mod middleware;
