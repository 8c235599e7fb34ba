//! Run state machine.

use std::fmt;

/// Progress of a single translation run.
///
/// Runs move `Idle -> TranslatingRuleBases -> EmittedSeparator ->
/// TranslatingQuery -> Done`, skipping `TranslatingQuery` when there is no
/// query. Any state can move to `Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has been opened yet.
    Idle,
    /// Translating the rule base at `index` (0-based).
    TranslatingRuleBases {
        /// Position in the request's rule-base list.
        index: usize,
    },
    /// Every rule base succeeded and the separator was written.
    EmittedSeparator,
    /// Translating the query document.
    TranslatingQuery,
    /// The run completed.
    Done,
    /// The run stopped at its first error.
    Failed,
}

impl RunState {
    /// Returns true for `Done` and `Failed`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::TranslatingRuleBases { index } => write!(f, "translating rule base {}", index + 1),
            Self::EmittedSeparator => write!(f, "emitted separator"),
            Self::TranslatingQuery => write!(f, "translating query"),
            Self::Done => write!(f, "done"),
            Self::Failed => write!(f, "failed"),
        }
    }
}
