//! Drink categories.
//!
//! Every category has its own capacity pool. See
//! [`CapacityLimits`](crate::config::CapacityLimits) for how many orders of each
//! one may be in preparation at the same time.

use crate::admission_actor::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The class of a drink order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Beer,
    Drink,
}

impl Category {
    /// All known categories, in display order.
    pub const ALL: [Category; 2] = [Category::Beer, Category::Drink];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beer => "BEER",
            Category::Drink => "DRINK",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrderError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("BEER".parse::<Category>(), Ok(Category::Beer));
        assert_eq!("drink".parse::<Category>(), Ok(Category::Drink));
        assert_eq!(" Beer ".parse::<Category>(), Ok(Category::Beer));
    }

    #[test]
    fn unknown_category_is_a_validation_error() {
        let err = "WINE".parse::<Category>().unwrap_err();
        assert_eq!(err, OrderError::UnknownCategory("WINE".to_string()));
        assert!(!err.is_capacity_exceeded());
    }

    #[test]
    fn serializes_as_upper_case_name() {
        assert_eq!(serde_json::to_string(&Category::Beer).unwrap(), "\"BEER\"");
        let parsed: Category = serde_json::from_str("\"DRINK\"").unwrap();
        assert_eq!(parsed, Category::Drink);
    }
}
