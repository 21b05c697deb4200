use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RapportError, RapportResult};

/// Identifier of a stored contact. Assigned by the repository, never by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u32);

impl ContactId {
    pub const FIRST: ContactId = ContactId(1);

    pub fn value(self) -> u32 {
        self.0
    }

    /// The identifier that follows this one. Fails once `u32::MAX` is reached.
    pub fn next(self) -> RapportResult<Self> {
        self.0
            .checked_add(1)
            .map(ContactId)
            .ok_or_else(|| RapportError::Other("identifier space exhausted".into()))
    }

    /// `max(ids) + 1`, or `FIRST` when there are none.
    pub fn after_max<I: IntoIterator<Item = ContactId>>(ids: I) -> RapportResult<Self> {
        match ids.into_iter().max() {
            Some(max) => max.next(),
            None => Ok(Self::FIRST),
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ContactId)
    }
}
