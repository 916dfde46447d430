use color_eyre::Result;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::prefix_index::PrefixIndex;

/// Outcome of completing one piece of typed text.
#[derive(Debug, Serialize)]
pub struct Completion {
    pub text: String,
    pub token: String,
    pub found: bool,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<String>,
}

pub struct Completer<'a> {
    index: &'a PrefixIndex,
    separators: Regex,
    limit: Option<usize>,
    select: Option<usize>,
}

impl<'a> Completer<'a> {
    pub fn new(config: &Config, index: &'a PrefixIndex) -> Result<Self> {
        Ok(Self {
            index,
            separators: config.separators_regex()?,
            limit: config.limit,
            select: config.select,
        })
    }

    pub fn complete(&self, text: &str) -> Completion {
        let token = self.last_token(text);

        if token.is_empty() {
            debug!(text, "nothing to complete");
            return Completion {
                text: text.to_string(),
                token: String::new(),
                found: false,
                suggestions: Vec::new(),
                applied: None,
            };
        }

        let found = self.index.contains_word(token);
        let mut suggestions = self.index.words_with_prefix(token);

        debug!(token, found, matches = suggestions.len(), "completed");

        if let Some(limit) = self.limit {
            suggestions.truncate(limit);
        }

        let applied = self.select.and_then(|n| {
            match n.checked_sub(1).and_then(|i| suggestions.get(i)) {
                Some(suggestion) => Some(apply_suggestion(text, token, suggestion)),
                None => {
                    warn!(select = n, suggestions = suggestions.len(), "selected suggestion out of range");
                    None
                }
            }
        });

        Completion {
            text: text.to_string(),
            token: token.to_string(),
            found,
            suggestions,
            applied,
        }
    }

    /// The word being typed: whatever follows the last separator. Empty when
    /// the text ends with a separator.
    pub fn last_token<'t>(&self, text: &'t str) -> &'t str {
        match self.separators.find_iter(text).last() {
            None => text,
            Some(separator) => &text[separator.end()..],
        }
    }
}

/// Replaces `token` at the end of `text` with `suggestion`.
pub fn apply_suggestion(text: &str, token: &str, suggestion: &str) -> String {
    let head = text.strip_suffix(token).unwrap_or(text);
    format!("{}{}", head, suggestion)
}
