//! Document references and the sources that resolve them.
//!
//! A [`DocumentRef`] names a document without holding its content. A
//! [`DocumentSource`] turns a reference into a readable stream at the moment
//! the document is needed.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::error::{AccessFailure, Error};
use crate::Result;

/// A resolvable handle to a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentRef(PathBuf);

impl DocumentRef {
    /// Creates a reference to the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path this reference points at.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for DocumentRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for DocumentRef {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for DocumentRef {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for DocumentRef {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

/// Resolves document references into input streams.
///
/// The returned reader is owned by the caller and released when dropped,
/// so a source never has to track open handles.
pub trait DocumentSource {
    /// The stream type produced for an opened document.
    type Reader: Read;

    /// Opens `document` for reading.
    ///
    /// # Errors
    /// Returns a `DocumentAccess` error if the document does not exist or
    /// cannot be opened.
    fn open(&self, document: &DocumentRef) -> Result<Self::Reader>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    type Reader = S::Reader;

    fn open(&self, document: &DocumentRef) -> Result<Self::Reader> {
        (**self).open(document)
    }
}

/// Opens documents from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSource;

impl FileSource {
    /// Creates a filesystem source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentSource for FileSource {
    type Reader = BufReader<File>;

    fn open(&self, document: &DocumentRef) -> Result<Self::Reader> {
        let file = File::open(document.path()).map_err(|e| {
            Error::document_access(document.clone(), AccessFailure::from_io(e))
        })?;
        Ok(BufReader::new(file))
    }
}

/// Serves documents from memory.
///
/// Useful when documents are produced by another component rather than
/// read from disk.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: HashMap<DocumentRef, Vec<u8>>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any previous content under the same name.
    pub fn insert(&mut self, document: impl Into<DocumentRef>, content: impl Into<Vec<u8>>) {
        self.documents.insert(document.into(), content.into());
    }

    /// Builder form of [`MemorySource::insert`].
    #[must_use]
    pub fn with(mut self, document: impl Into<DocumentRef>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(document, content);
        self
    }

    /// Returns the number of documents held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if no documents are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self, document: &DocumentRef) -> Result<Self::Reader> {
        self.documents
            .get(document)
            .map(|bytes| Cursor::new(bytes.clone()))
            .ok_or_else(|| Error::document_access(document.clone(), AccessFailure::NotFound))
    }
}
