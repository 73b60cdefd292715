//! `listen`: handle a stream of chat messages.
//!
//! Input is one JSON `IncomingMessage` per line on stdin; each reply is one
//! JSON `Reply` line on stdout. Every message is handled in its own task so a
//! slow aggregator never holds up the next message. Ctrl-C stops reading and
//! aborts whatever is still in flight.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tokio::task::JoinSet;

use crate::bot::{HandleOutcome, IncomingMessage, JsonLinesSink, LinkListener};
use crate::config::Config;
use crate::error::ResultExt;
use crate::resolver::ResolverService;

#[derive(Debug, Default)]
struct Tally {
    received: usize,
    replied: usize,
    unresolved: usize,
    failed: usize,
}

impl Tally {
    fn record(&mut self, outcome: &HandleOutcome) {
        match outcome {
            HandleOutcome::Replied => self.replied += 1,
            HandleOutcome::Unresolved => self.unresolved += 1,
            HandleOutcome::DeliveryFailed => self.failed += 1,
            HandleOutcome::Ignored | HandleOutcome::NotMusic => {}
        }
    }
}

/// Read messages until EOF or Ctrl-C
pub fn cmd_listen(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    let resolver = ResolverService::new(config).with_context("building aggregator clients")?;
    let resolver_timeout = resolver.timeout();
    let listener = LinkListener::new(Arc::new(resolver));
    let sink = Arc::new(JsonLinesSink::new(tokio::io::stdout()));

    rt.block_on(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut tasks: JoinSet<HandleOutcome> = JoinSet::new();
        let mut tally = Tally::default();
        let mut line_no = 0usize;
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        tracing::info!(timeout = ?resolver_timeout, "listening for messages on stdin");

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.with_context("reading stdin")? else {
                        break;
                    };
                    line_no += 1;
                    if line.trim().is_empty() {
                        continue;
                    }

                    let message =
                        match serde_json::from_str::<IncomingMessage>(&line).with_context(format!("line {line_no}")) {
                            Ok(message) => message,
                            Err(e) => {
                                tracing::warn!(error = %e, "skipping malformed message");
                                continue;
                            }
                        };
                    tally.received += 1;

                    let listener = listener.clone();
                    let sink = Arc::clone(&sink);
                    tasks.spawn(async move { listener.handle(&message, sink.as_ref()).await });
                }
                Some(done) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Ok(outcome) = done {
                        tally.record(&outcome);
                    }
                }
                _ = &mut shutdown => {
                    tracing::info!(in_flight = tasks.len(), "interrupted, abandoning in-flight messages");
                    tasks.abort_all();
                    break;
                }
            }
        }

        while let Some(done) = tasks.join_next().await {
            if let Ok(outcome) = done {
                tally.record(&outcome);
            }
        }

        tracing::info!(
            received = tally.received,
            replied = tally.replied,
            unresolved = tally.unresolved,
            failed = tally.failed,
            "listener stopped"
        );
        Ok::<_, anyhow::Error>(())
    })
}
