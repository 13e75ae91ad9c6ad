use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol versions whose block bodies and execution payloads this crate knows how to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkName {
    Capella,
    Deneb,
}

impl fmt::Display for ForkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForkName::Capella => f.write_str("capella"),
            ForkName::Deneb => f.write_str("deneb"),
        }
    }
}
