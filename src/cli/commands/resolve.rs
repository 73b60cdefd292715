//! One-shot classification and resolution commands.

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::bot::{IncomingMessage, LinkListener, Sender};
use crate::config::Config;
use crate::error::ResultExt;
use crate::links;
use crate::resolver::ResolverService;

/// Print the detected platform and URL
pub fn cmd_classify(text: &str) -> anyhow::Result<()> {
    match links::classify(text) {
        Some(link) => println!("{}\t{}", link.platform, link.url),
        None => println!("no music link"),
    }
    Ok(())
}

/// Run the full pipeline on one text and print the reply
pub fn cmd_resolve(
    rt: &Runtime,
    config: &Config,
    text: &str,
    user: &str,
    user_id: Option<i64>,
) -> anyhow::Result<()> {
    let resolver = ResolverService::new(config).with_context("building aggregator clients")?;
    let listener = LinkListener::new(Arc::new(resolver));

    let message = IncomingMessage {
        text: Some(text.to_string()),
        sender: Some(Sender {
            id: user_id,
            name: user.to_string(),
        }),
        ..Default::default()
    };

    rt.block_on(async {
        match listener.prepare_reply(&message).await {
            Ok(reply) => println!("{}", reply.text),
            Err(outcome) => {
                tracing::debug!(?outcome, "no reply");
                println!("nothing to send");
            }
        }
    });
    Ok(())
}
