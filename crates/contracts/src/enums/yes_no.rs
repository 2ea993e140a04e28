use serde::{Deserialize, Serialize};

use super::Choice;

/// Да/Нет для булевых фильтров (self_lubricating)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl Choice for YesNo {
    fn all() -> &'static [Self] {
        &[
            YesNo::Yes,
            YesNo::No,
        ]
    }

    fn display_name(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl YesNo {
    pub fn as_bool(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}
