/// The two terminal moves available to either side of the table.
///
/// For the simulated opponent, `Call` means it keeps playing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Call,
    Fold,
}

impl Action {
    pub const fn all() -> [Self; 2] {
        [Action::Call, Action::Fold]
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Call => "Call",
            Action::Fold => "Fold",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Call => write!(f, "CALL"),
            Action::Fold => write!(f, "FOLD"),
        }
    }
}
