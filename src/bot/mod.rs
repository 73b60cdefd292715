//! Chat-facing side of the resolver.
//!
//! The dispatcher hands us an [`IncomingMessage`]; [`LinkListener`] decides
//! whether it carries a music link and hands at most one [`Reply`] to a
//! [`ReplySink`].

mod handler;
pub mod message;
pub mod sink;

pub use handler::{HandleOutcome, LinkListener};
pub use message::{IncomingMessage, ParseMode, Reply, Sender};
pub use sink::{DeliveryError, JsonLinesSink, ReplySink};
