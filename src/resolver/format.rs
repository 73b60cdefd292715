//! Rendering a resolution into a Markdown reply.

use super::domain::ResolutionResult;

/// Markdown characters escaped in user-controlled text
const MARKDOWN_SPECIAL: &[char] = &['\\', '*', '_', '`', '[', ']'];

/// The person who shared the link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// Chat user id, used for a mention link when present
    pub user_id: Option<i64>,
    pub name: String,
}

impl Attribution {
    pub fn new(user_id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }

    /// Markdown mention: `[name](tg://user?id=N)`, or the escaped name
    pub fn mention(&self) -> String {
        let name = escape_markdown(self.name.trim());
        let name = if name.is_empty() { "someone".to_string() } else { name };
        match self.user_id {
            Some(id) => format!("[{name}](tg://user?id={id})"),
            None => name,
        }
    }
}

/// Escape Markdown control characters
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Percent-encode the characters that would end a Markdown link target
fn link_target(url: &str) -> String {
    url.replace('(', "%28").replace(')', "%29")
}

/// Render the reply, or `None` when there is nothing worth sending.
///
/// Layout: header, blank line, `[Platform](url) | ...`, blank line, one
/// `[View on X](page)` line per aggregator that supplied a page.
pub fn render_reply(result: &ResolutionResult, shared_by: &Attribution) -> Option<String> {
    if result.is_unresolved() {
        return None;
    }

    let mut sections = vec![header(result, shared_by)];

    if !result.links.is_empty() {
        let links = result
            .links
            .iter()
            .map(|l| format!("[{}]({})", escape_markdown(&l.platform), link_target(&l.url)))
            .collect::<Vec<_>>()
            .join(" | ");
        sections.push(links);
    }

    let pages = result.canonical_pages();
    if !pages.is_empty() {
        let pages = pages
            .iter()
            .map(|(source, url)| format!("[View on {source}]({})", link_target(url)))
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(pages);
    }

    Some(sections.join("\n\n"))
}

fn header(result: &ResolutionResult, shared_by: &Attribution) -> String {
    let mention = shared_by.mention();
    match (result.title(), result.artist()) {
        (Some(title), Some(artist)) => format!(
            "**{}** by **{}** from: **{mention}**",
            escape_markdown(title),
            escape_markdown(artist)
        ),
        (Some(only), None) | (None, Some(only)) => {
            format!("**{}** from: **{mention}**", escape_markdown(only))
        }
        (None, None) => format!("Shared by **{mention}**"),
    }
}
