//! Line-Search Client Module
//!
//! A minimal client for the one-shot protocol: connect, optionally negotiate TLS,
//! send the query, read the single response line, done.

pub mod query;
