//! Sentences shared by the integration tests.

#![allow(dead_code)]

use mwe_detector::annotation::{AnnotatedSentence, AnnotatedToken, NO_LABEL, PartOfSpeech};
use mwe_detector::error::Result;

use PartOfSpeech::*;

/// (form, lemma, pos, head, Number)
pub type Row<'a> = (&'a str, &'a str, PartOfSpeech, usize, Option<&'a str>);

pub fn build(rows: &[Row<'_>]) -> Result<AnnotatedSentence> {
    let tokens = rows
        .iter()
        .enumerate()
        .map(|(i, &(form, lemma, pos, head, number))| {
            let token = AnnotatedToken::new(i, form, lemma, pos).with_head(head);
            match number {
                Some(number) => token.with_feature("Number", number),
                None => token,
            }
        })
        .collect();
    AnnotatedSentence::new(tokens)
}

/// "The quick brown fox jumps over the lazy dog."
pub fn fox() -> Result<AnnotatedSentence> {
    build(&[
        ("The", "the", Det, 3, None),
        ("quick", "quick", Adj, 3, None),
        ("brown", "brown", Adj, 3, None),
        ("fox", "fox", Noun, 4, Some("Sing")),
        ("jumps", "jump", Verb, 4, None),
        ("over", "over", Adp, 4, None),
        ("the", "the", Det, 8, None),
        ("lazy", "lazy", Adj, 8, None),
        ("dog", "dog", Noun, 5, Some("Sing")),
        (".", ".", Punct, 4, None),
    ])
}

/// "Time flies like an arrow; fruit flies like a banana. People like these flies."
pub fn time_flies() -> Result<AnnotatedSentence> {
    build(&[
        ("Time", "time", Noun, 1, Some("Sing")),
        ("flies", "fly", Verb, 1, None),
        ("like", "like", Adp, 1, None),
        ("an", "an", Det, 4, None),
        ("arrow", "arrow", Noun, 2, Some("Sing")),
        (";", ";", Punct, 1, None),
        ("fruit", "fruit", Noun, 7, Some("Sing")),
        ("flies", "fly", Noun, 8, Some("Plur")),
        ("like", "like", Verb, 1, None),
        ("a", "a", Det, 10, None),
        ("banana", "banana", Noun, 8, Some("Sing")),
        (".", ".", Punct, 8, None),
        ("People", "people", Noun, 13, Some("Plur")),
        ("like", "like", Verb, 13, None),
        ("these", "these", Det, 15, None),
        ("flies", "fly", Noun, 13, Some("Plur")),
        (".", ".", Punct, 13, None),
    ])
}

/// A copy of `sentence` whose tokens at `indices` carry `label`.
pub fn with_gold(sentence: &AnnotatedSentence, indices: &[usize], label: &str) -> Result<AnnotatedSentence> {
    let labels = (0..sentence.len())
        .map(|i| {
            if indices.contains(&i) {
                label.to_string()
            } else {
                NO_LABEL.to_string()
            }
        })
        .collect();
    let mut labelled = sentence.clone();
    labelled.set_labels(labels)?;
    Ok(labelled)
}
