//! Annotated input model.
//!
//! This module defines what the detector reads from the external linguistic
//! annotation pipeline: tokens with lemma, part-of-speech tag, dependency
//! head and relation, and morphological features, grouped into sentences.
//! It also holds the MWE label scheme shared by gold corpora and detector
//! output, and the [`Annotator`] seam through which annotation backends are
//! plugged in.

pub mod annotator;
pub mod label;
pub mod normalizer;
pub mod pos;
pub mod sentence;
pub mod token;

pub use annotator::{Annotator, PipelineAnnotator};
pub use label::{LABEL_SEPARATOR, MweLabel};
pub use normalizer::LemmaNormalizer;
pub use pos::PartOfSpeech;
pub use sentence::AnnotatedSentence;
pub use token::{AnnotatedToken, MorphFeatures, NO_LABEL};
