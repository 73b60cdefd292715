//! Songwhip API integration
//!
//! Songwhip is an independent link aggregator: it returns its own page for
//! a streaming URL plus regional per-platform links.

mod adapter;
mod client;
pub mod dto;

pub use client::SongwhipClient;
