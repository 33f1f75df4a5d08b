//! Process-wide memoized classifier handle.

use crate::DistilBertClassifier;
use marquee_error::MarqueeResult;
use marquee_interface::GenreClassifier;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Function that loads a classifier from an artifact location.
pub type Loader<C> = fn(&Path) -> MarqueeResult<C>;

/// Loads a classifier on first use and reuses it for every later call.
///
/// Concurrent first callers block on the same initialization, so the artifact
/// is read at most once. A failed load is not remembered; the next call tries
/// again.
pub struct LazyClassifier<C = DistilBertClassifier> {
    location: PathBuf,
    loader: Loader<C>,
    handle: OnceCell<C>,
}

impl LazyClassifier<DistilBertClassifier> {
    /// Lazily load the DistilBERT artifact in `location`.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self::with_loader(location, DistilBertClassifier::load)
    }
}

impl<C> LazyClassifier<C> {
    /// Lazily load `location` with a custom loader.
    pub fn with_loader(location: impl Into<PathBuf>, loader: Loader<C>) -> Self {
        Self {
            location: location.into(),
            loader,
            handle: OnceCell::new(),
        }
    }

    /// Artifact location.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Whether the classifier has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Load the classifier if needed and return the shared handle.
    ///
    /// # Errors
    ///
    /// Returns whatever the loader returns, typically an artifact error.
    #[instrument(skip_all, fields(location = %self.location.display()))]
    pub fn load(&self) -> MarqueeResult<&C> {
        self.handle.get_or_try_init(|| {
            debug!("Loading classifier artifact");
            (self.loader)(&self.location)
        })
    }
}

impl<C> std::fmt::Debug for LazyClassifier<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyClassifier")
            .field("location", &self.location)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl<C> GenreClassifier for LazyClassifier<C>
where
    C: GenreClassifier,
{
    fn infer(&self, text: &str) -> MarqueeResult<String> {
        self.load()?.infer(text)
    }
}
