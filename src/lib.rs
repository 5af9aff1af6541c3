//! # mwe-detector
//!
//! Lexicon-based detection of multi-word expressions (idioms, phrasal
//! verbs, light verb constructions) in linguistically annotated sentences.
//!
//! ## Features
//!
//! - Exact multiset matching of component lemmas, contiguous or with gaps
//! - Eight trainable acceptance filters, selectable per part of speech
//! - JSON lexicon persistence, one file per language
//! - CUPT corpus reading for training and batch detection
//!
//! ```
//! use mwe_detector::annotation::{AnnotatedSentence, AnnotatedToken, PartOfSpeech};
//! use mwe_detector::detector::MweDetector;
//!
//! let tokens = vec![
//!     AnnotatedToken::new(0, "kick", "kick", PartOfSpeech::Verb)
//!         .with_mwe("1:kick the bucket:VERB"),
//!     AnnotatedToken::new(1, "the", "the", PartOfSpeech::Det)
//!         .with_head(2)
//!         .with_mwe("1:kick the bucket:VERB"),
//!     AnnotatedToken::new(2, "bucket", "bucket", PartOfSpeech::Noun)
//!         .with_head(0)
//!         .with_feature("Number", "Sing")
//!         .with_mwe("1:kick the bucket:VERB"),
//! ];
//! let gold = AnnotatedSentence::new(tokens).unwrap();
//!
//! let mut detector = MweDetector::new();
//! detector.train([&gold], None);
//!
//! let detected = detector.detect(&gold);
//! assert_eq!(detected.labels(), vec!["1:kick the bucket:VERB"; 3]);
//! ```

pub mod annotation;
pub mod cli;
pub mod corpus;
pub mod detector;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod matcher;
pub mod util;

pub mod prelude {
    pub use crate::annotation::{AnnotatedSentence, AnnotatedToken, Annotator, PartOfSpeech};
    pub use crate::detector::{MweDetector, SharedDetector};
    pub use crate::error::{MweError, Result};
    pub use crate::filter::FilterId;
    pub use crate::lexicon::{ActiveFilterConfig, LexiconStore, MweLexicon, RankTable};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
