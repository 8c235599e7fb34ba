//! The validated description of a single translation run.

use crate::Result;
use crate::document::DocumentRef;
use crate::error::Error;

/// What a run should translate.
///
/// Constructed once per invocation and immutable afterwards. Holds at least
/// one rule base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRequest {
    rule_bases: Vec<DocumentRef>,
    query: Option<DocumentRef>,
    import_closure: bool,
}

impl RunRequest {
    /// Creates a request over the given rule bases, in translation order.
    ///
    /// # Errors
    /// Returns an `InvalidRequest` error if `rule_bases` is empty.
    pub fn new<I, D>(rule_bases: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<DocumentRef>,
    {
        let rule_bases: Vec<DocumentRef> = rule_bases.into_iter().map(Into::into).collect();
        if rule_bases.is_empty() {
            return Err(Error::invalid_request("at least one rule base is required"));
        }
        Ok(Self {
            rule_bases,
            query: None,
            import_closure: false,
        })
    }

    /// Sets the query document translated after every rule base.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<DocumentRef>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Records the import-closure flag.
    ///
    /// Carried for a resolver that expands imports before the run; nothing
    /// in the translation run acts on it.
    #[must_use]
    pub fn with_import_closure(mut self, import_closure: bool) -> Self {
        self.import_closure = import_closure;
        self
    }

    /// The rule bases in translation order. Never empty.
    #[must_use]
    pub fn rule_bases(&self) -> &[DocumentRef] {
        &self.rule_bases
    }

    /// The query document, if any.
    #[must_use]
    pub fn query(&self) -> Option<&DocumentRef> {
        self.query.as_ref()
    }

    /// Whether import closure was requested.
    #[must_use]
    pub const fn import_closure(&self) -> bool {
        self.import_closure
    }
}
