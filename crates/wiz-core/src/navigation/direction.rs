use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Back,
    Next,
    Direct,
}

impl NavigationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationDirection::Back => "back",
            NavigationDirection::Next => "next",
            NavigationDirection::Direct => "direct",
        }
    }
}

impl fmt::Display for NavigationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
