use serde::{Deserialize, Serialize};
use std::fmt;

/// A drawn number in `[1, max_lucky]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LuckyNumber(u32);

impl LuckyNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LuckyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player in the lottery: a name and the lucky number drawn for it.
///
/// Records are immutable once created. The list that holds them owns the
/// link to the next record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    name: String,
    lucky: LuckyNumber,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, lucky: LuckyNumber) -> Self {
        Self {
            name: name.into(),
            lucky,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lucky(&self) -> LuckyNumber {
        self.lucky
    }

    pub fn matches(&self, winning: LuckyNumber) -> bool {
        self.lucky == winning
    }
}

impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has lucky number {}", self.name, self.lucky)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = PlayerRecord::new("Bo", LuckyNumber::new(7));
        assert_eq!(record.to_string(), "Bo has lucky number 7");
        assert!(record.matches(LuckyNumber::new(7)));
        assert!(!record.matches(LuckyNumber::new(8)));
    }

    #[test]
    fn test_lucky_number_serializes_as_integer() {
        let json = serde_json::to_string(&PlayerRecord::new("Ann", LuckyNumber::new(3))).unwrap();
        assert_eq!(json, r#"{"name":"Ann","lucky":3}"#);
    }
}
