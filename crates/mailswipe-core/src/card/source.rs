//! Card sources: the built-in sample set and JSON files.

use std::collections::HashSet;
use std::path::Path;

use super::model::CardRecord;
use crate::{Error, Result};

/// Parses a JSON array of card records and validates it.
///
/// # Errors
///
/// Returns `Error::Json` for malformed input, `Error::EmptyCardId` or
/// `Error::DuplicateCardId` if the ids are not usable as identity keys.
pub fn parse_cards(json: &str) -> Result<Vec<CardRecord>> {
    let cards: Vec<CardRecord> = serde_json::from_str(json)?;
    validate_cards(&cards)?;
    Ok(cards)
}

/// Reads and parses a JSON card file.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, otherwise the same errors
/// as [`parse_cards`].
pub fn load_cards(path: impl AsRef<Path>) -> Result<Vec<CardRecord>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let cards = parse_cards(&contents)?;
    tracing::debug!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Checks that every id is non-empty and unique.
///
/// # Errors
///
/// Returns the first problem found, in source order.
pub fn validate_cards(cards: &[CardRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cards.len());
    for (index, card) in cards.iter().enumerate() {
        if card.id.as_str().trim().is_empty() {
            return Err(Error::EmptyCardId { index });
        }
        if !seen.insert(&card.id) {
            return Err(Error::DuplicateCardId(card.id.to_string()));
        }
    }
    Ok(())
}

/// The eight demo records used when no card file is given.
#[must_use]
pub fn sample_cards() -> Vec<CardRecord> {
    vec![
        CardRecord::new(
            "1",
            "Apple",
            "Your Apple ID security update",
            "We've updated our security protocols to better protect your account. Please review the changes in your account settings.",
            "2:34 PM",
        )
        .with_tags(["Security", "Account Update", "Action Required"]),
        CardRecord::new(
            "2",
            "GitHub",
            "Weekly digest: 12 new notifications",
            "You have new activity on your repositories. Check out the latest pull requests, issues, and discussions.",
            "1:22 PM",
        )
        .with_tags(["Development", "Weekly Update", "Notifications"]),
        CardRecord::new(
            "3",
            "Figma",
            "Design system updates available",
            "New components and tokens have been added to your team's design system. Update your local files to get the latest changes.",
            "11:45 AM",
        )
        .with_tags(["Design", "Update Available", "Team"])
        .with_read(true),
        CardRecord::new(
            "4",
            "LinkedIn",
            "You have 3 new connection requests",
            "Sarah Chen, Michael Rodriguez, and David Kim would like to connect with you on LinkedIn.",
            "10:30 AM",
        )
        .with_tags(["Networking", "Connection Requests", "Social"]),
        CardRecord::new(
            "5",
            "Slack",
            "Daily standup reminder",
            "Don't forget about today's standup meeting at 9:00 AM. The team is waiting for your updates on the current sprint.",
            "9:15 AM",
        )
        .with_tags(["Meeting", "Reminder", "Team"])
        .with_read(true),
        CardRecord::new(
            "6",
            "Netflix",
            "New episodes of your favorite show",
            "The latest season of 'Tech Innovators' is now available. Continue watching where you left off.",
            "Yesterday",
        )
        .with_tags(["Entertainment", "New Content", "TV Show"])
        .with_read(true),
        CardRecord::new(
            "7",
            "Bank of America",
            "Monthly statement ready",
            "Your October statement is now available for download. Review your transactions and account activity.",
            "Yesterday",
        )
        .with_tags(["Banking", "Statement", "Monthly"]),
        CardRecord::new(
            "8",
            "Spotify",
            "Your Discover Weekly is ready",
            "We've curated 30 new songs based on your listening history. Discover your new favorite tracks.",
            "Monday",
        )
        .with_tags(["Music", "Personalized", "Weekly"])
        .with_read(true),
    ]
}
