//! Private-message addressing and routed message construction.
//!
//! A chat payload starting with `@username ` is a private message for
//! that user; everything else is public. Whether the token actually
//! resolves to a known user is decided by the send-message use case
//! against the user directory; this module only handles the pure text
//! shape.

use super::broadcast::Audience;
use super::user::UserId;

/// Resolved private-message recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub id: UserId,
    /// Username as stored in the directory, not as typed by the sender.
    pub username: String,
}

/// A validated, routing-decided chat message.
///
/// Content is always trimmed and non-empty. A public message carries no
/// recipient; privacy is exactly the presence of one.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedMessage {
    pub content: String,
    pub sender_id: UserId,
    pub recipient: Option<Recipient>,
}

impl RoutedMessage {
    pub fn public(sender_id: UserId, content: String) -> Self {
        Self {
            content,
            sender_id,
            recipient: None,
        }
    }

    pub fn private(sender_id: UserId, content: String, recipient: Recipient) -> Self {
        Self {
            content,
            sender_id,
            recipient: Some(recipient),
        }
    }

    pub fn is_private(&self) -> bool {
        self.recipient.is_some()
    }

    /// The recipient set this message should be delivered to.
    pub fn audience(&self) -> Audience {
        match &self.recipient {
            Some(recipient) => Audience::Private {
                sender: self.sender_id,
                recipient: recipient.id,
            },
            None => Audience::Everyone,
        }
    }
}

/// Detect the private-addressing prefix `@<token> <rest>`.
///
/// Returns the candidate recipient token and the remaining message when
/// the content starts with `@`, the token is non-empty, and a non-empty
/// remainder follows after whitespace. Returns `None` otherwise; the
/// caller then treats the content as an ordinary public message.
pub fn split_private_prefix(content: &str) -> Option<(&str, &str)> {
    let after_at = content.strip_prefix('@')?;
    let token_end = after_at.find(char::is_whitespace)?;
    let token = &after_at[..token_end];
    let rest = after_at[token_end..].trim();
    if token.is_empty() || rest.is_empty() {
        return None;
    }
    Some((token, rest))
}
