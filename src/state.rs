use std::fmt;

/// Observable state of an `Owner`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub enum OwnerState {
    Empty,
    Owning,
}

impl OwnerState {
    pub fn is_owning(self) -> bool {
        self == OwnerState::Owning
    }
}

impl fmt::Display for OwnerState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OwnerState::Empty => write!(f, "empty"),
            OwnerState::Owning => write!(f, "owning"),
        }
    }
}

/// Operations that need an owning handle.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub enum Operation {
    Dereference,
    Release,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Dereference => write!(f, "dereference"),
            Operation::Release => write!(f, "release"),
        }
    }
}
