//! Annotated corpora.
//!
//! Gold training data and pre-annotated input arrive as CUPT files: CoNLL-U
//! with an extra column of MWE labels. The reader turns them into
//! [`AnnotatedSentence`](crate::annotation::AnnotatedSentence)s, and
//! [`CuptAnnotator`] exposes the same parsing as an annotation backend.

pub mod cupt;

pub use cupt::{CuptAnnotator, CuptConfig, DEFAULT_LABEL_INDEX, load_cupt, parse_cupt, read_cupt};
