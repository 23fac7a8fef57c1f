use std::fmt;
use std::str::FromStr;

use crate::error::{validation_error, Error};
use crate::ui::{Input, Toggle};

/// Named user actions. This is the complete set of triggers the page offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Initialize,
    FindRoute,
    Reset,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Initialize, Action::FindRoute, Action::Reset];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::FindRoute => "find-route",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| validation_error(format!("unknown action `{}`", name)))
    }
}

/// Everything a page can send to the navigator: edits to its form controls
/// and triggered actions.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Edit { input: Input, value: String },
    Check { toggle: Toggle, checked: bool },
    Trigger(Action),
}
