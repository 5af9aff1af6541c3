//! The annotation backend seam.
//!
//! The detector never tokenizes, tags or parses text itself. Any backend that
//! can turn raw text into an [`AnnotatedSentence`] implements [`Annotator`];
//! a [`PipelineAnnotator`] wraps a backend and post-processes its output with
//! lemma normalizers, applied in the order they were added.
//!
//! ```
//! use std::sync::Arc;
//!
//! use mwe_detector::annotation::{
//!     AnnotatedSentence, AnnotatedToken, Annotator, LemmaNormalizer, PartOfSpeech,
//!     PipelineAnnotator,
//! };
//! use mwe_detector::error::Result;
//!
//! struct WhitespaceBackend;
//!
//! impl Annotator for WhitespaceBackend {
//!     fn annotate(&self, text: &str) -> Result<AnnotatedSentence> {
//!         let tokens = text
//!             .split_whitespace()
//!             .enumerate()
//!             .map(|(i, w)| AnnotatedToken::new(i, w, w.to_lowercase(), PartOfSpeech::X))
//!             .collect();
//!         AnnotatedSentence::new(tokens)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "whitespace"
//!     }
//! }
//!
//! let annotator = PipelineAnnotator::new(Arc::new(WhitespaceBackend))
//!     .add_normalizer(LemmaNormalizer::for_language("en"));
//! let sentence = annotator.annotate("I 've seen it").unwrap();
//! assert_eq!(sentence.lemmas(), vec!["i", "have", "seen", "it"]);
//! ```

use std::sync::Arc;

use crate::annotation::normalizer::LemmaNormalizer;
use crate::annotation::sentence::AnnotatedSentence;
use crate::error::Result;

/// Trait for linguistic annotation backends.
///
/// The trait requires `Send + Sync` so one backend can serve concurrent
/// detection workers.
pub trait Annotator: Send + Sync {
    /// Annotate one sentence of raw text.
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence>;

    /// Get the name of this backend (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// An annotator that applies lemma normalizers to a backend's output.
#[derive(Clone)]
pub struct PipelineAnnotator {
    backend: Arc<dyn Annotator>,
    normalizers: Vec<LemmaNormalizer>,
}

impl PipelineAnnotator {
    /// Create a pipeline around the given backend.
    pub fn new(backend: Arc<dyn Annotator>) -> Self {
        PipelineAnnotator {
            backend,
            normalizers: Vec::new(),
        }
    }

    /// Add a lemma normalizer to the pipeline.
    pub fn add_normalizer(mut self, normalizer: LemmaNormalizer) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    /// Get the backend used by this pipeline.
    pub fn backend(&self) -> &Arc<dyn Annotator> {
        &self.backend
    }

    /// Get the normalizers used by this pipeline.
    pub fn normalizers(&self) -> &[LemmaNormalizer] {
        &self.normalizers
    }
}

impl Annotator for PipelineAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence> {
        let mut sentence = self.backend.annotate(text)?;
        for normalizer in &self.normalizers {
            normalizer.apply(&mut sentence);
        }
        Ok(sentence)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnnotator")
            .field("backend", &self.backend.name())
            .field("normalizers", &self.normalizers.len())
            .finish()
    }
}
