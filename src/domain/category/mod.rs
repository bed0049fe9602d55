use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of account a user holds.
///
/// Both categories share the same deposit and withdrawal rules; the tag only
/// decides how the account is persisted and displayed. The serialized names
/// are the ones found in existing store files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Account")]
    Checking,
    #[serde(rename = "SavingAccount")]
    Savings,
}

impl Category {
    /// Human readable prefix used when an account is displayed.
    pub fn label(self) -> &'static str {
        match self {
            Category::Checking => "Account",
            Category::Savings => "Savings Account",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_checking() {
        assert_eq!(Category::default(), Category::Checking);
    }

    #[test]
    fn labels_distinguish_savings() {
        assert_eq!(Category::Checking.to_string(), "Account");
        assert_eq!(Category::Savings.to_string(), "Savings Account");
    }
}
