//! Odesli (song.link) API integration
//!
//! Odesli returns metadata plus per-platform links for a streaming URL.
//! API docs: https://linktr.ee/odesli

mod adapter;
mod client;
pub mod dto;

pub use client::OdesliClient;
