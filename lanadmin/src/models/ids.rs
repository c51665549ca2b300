//! Type-safe ID wrappers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user identifier as assigned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Create a new ID.
    pub fn new(id: i64) -> Self {
        UserId(id)
    }

    /// Get the raw value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId(n)
    }
}

impl From<i32> for UserId {
    fn from(n: i32) -> Self {
        UserId(n.into())
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(UserId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = UserId::new(12345);
        assert_eq!(id.get(), 12345);
        assert_eq!(format!("{}", id), "12345");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(" 42 ".parse::<UserId>(), Ok(UserId(42)));
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&UserId(7)).unwrap(), "7");
        let id: UserId = serde_json::from_str("9").unwrap();
        assert_eq!(id, UserId(9));
    }
}
