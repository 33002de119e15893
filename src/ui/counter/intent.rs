use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// A tag the counter does not know. Reduces to the unchanged count.
    Unrecognized(String),
}

impl Intent for CounterIntent {}

impl CounterIntent {
    /// Parse an action tag such as `INCREMENT` (case-insensitive).
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("increment") {
            Self::Increment
        } else if tag.eq_ignore_ascii_case("decrement") {
            Self::Decrement
        } else {
            Self::Unrecognized(tag.to_string())
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for CounterIntent {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}
