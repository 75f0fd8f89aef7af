use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// Listed company shown in the sidebar. Identity is the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub symbol: Symbol,
}

impl Company {
    pub fn new(name: impl Into<String>, symbol: &str) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }

        Ok(Self {
            name,
            symbol: Symbol::parse(symbol)?,
        })
    }

    /// Same listing, regardless of how the display name is spelled.
    pub fn same_listing(&self, other: &Company) -> bool {
        self.symbol == other.symbol
    }

    /// Dataset caption used on the chart, e.g. `Infosys (INFY.NS)`.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

impl Display for Company {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.caption())
    }
}
