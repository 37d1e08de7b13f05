use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps card numbers, CVVs and wallet tokens so `{:?}` and `{}` never print them.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str("********")
    }
}

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<str>> Masked<T> {
    /// Last `n` characters, e.g. the final four digits of a card
    pub fn suffix(&self, n: usize) -> &str {
        let s = self.0.as_ref();
        if n == 0 {
            return "";
        }
        let start = s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
        &s[start..]
    }

    /// First `n` characters, e.g. a token prefix shown on receipts
    pub fn prefix(&self, n: usize) -> &str {
        let s = self.0.as_ref();
        let end = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
        &s[..end]
    }
}
