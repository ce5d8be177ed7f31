//! Card record data model.

use serde::{Deserialize, Serialize};

/// Stable identity key of a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a new card id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One already-summarized mail item, as shown on a card or a list row.
///
/// Records are supplied from outside (a fetch/summarize service, a JSON file,
/// or the built-in samples) and never change while displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Unique identifier within a deck.
    pub id: CardId,
    /// Sender display name.
    pub sender: String,
    /// Message subject.
    pub subject: String,
    /// Short preview of the message body.
    pub preview: String,
    /// Short summary labels, rendered as chips.
    #[serde(default, alias = "aiSummary")]
    pub tags: Vec<String>,
    /// Pre-formatted time label ("2:34 PM", "Yesterday").
    pub time: String,
    /// Whether the message has been read.
    #[serde(default)]
    pub read: bool,
}

impl CardRecord {
    /// Creates an unread record with no tags.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        sender: impl Into<String>,
        subject: impl Into<String>,
        preview: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            subject: subject.into(),
            preview: preview.into(),
            tags: Vec::new(),
            time: time.into(),
            read: false,
        }
    }

    /// Sets the summary tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the read flag.
    #[must_use]
    pub const fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}
