//! The translator capability and target selection.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use rulebridge_foundation::{Error, Result};

use crate::prolog::PrologTranslator;
use crate::tptp::TptpTranslator;

/// Translates rule-language documents into a target formalism.
///
/// One instance serves a whole run. State accumulated while translating a
/// rule base (such as the signature table) stays visible to every later
/// call on the same instance.
///
/// Implementations render a whole document before writing it, so a failed
/// call leaves nothing of that document in `output`.
pub trait Translator {
    /// The formalism this translator emits.
    fn target(&self) -> Target;

    /// Translates one rule-base document from `input` into `output`.
    ///
    /// # Errors
    /// Returns `InputRead` if `input` fails, `Output` if `output` fails, and
    /// a syntax or semantic error if the document is rejected.
    fn translate_rule_base(&mut self, input: &mut dyn Read, output: &mut dyn Write)
    -> Result<()>;

    /// Translates a query document from `input` into `output`.
    ///
    /// # Errors
    /// Same conditions as [`Translator::translate_rule_base`].
    fn translate_query(&mut self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()>;
}

/// A supported target formalism.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Target {
    /// Prolog clauses.
    #[default]
    Prolog,
    /// TPTP first-order form.
    Tptp,
}

impl Target {
    /// Every supported target.
    pub const ALL: [Self; 2] = [Self::Prolog, Self::Tptp];

    /// The name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prolog => "prolog",
            Self::Tptp => "tptp",
        }
    }

    /// Creates a fresh translator for this target.
    #[must_use]
    pub fn translator(self) -> Box<dyn Translator> {
        match self {
            Self::Prolog => Box::new(PrologTranslator::new()),
            Self::Tptp => Box::new(TptpTranslator::new()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a target name that is not recognized.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown target formalism '{0}' (expected one of: prolog, tptp)")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}

/// Reads a whole document stream as UTF-8 text.
///
/// # Errors
/// Returns `InputRead` if the stream fails or is not valid UTF-8.
pub fn read_source(input: &mut dyn Read) -> Result<String> {
    let mut source = String::new();
    input
        .read_to_string(&mut source)
        .map_err(Error::input_read)?;
    Ok(source)
}

/// Writes a rendered document to the sink.
pub(crate) fn emit(output: &mut dyn Write, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).map_err(Error::output)
}
