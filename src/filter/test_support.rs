//! Hand-annotated sentences shared by filter and detector tests.

use crate::annotation::pos::PartOfSpeech::{self, *};
use crate::annotation::sentence::AnnotatedSentence;
use crate::annotation::token::AnnotatedToken;
use crate::filter::TrainingExample;

/// (form, lemma, pos, head, dependency, Number)
type Row<'a> = (&'a str, &'a str, PartOfSpeech, usize, &'a str, Option<&'a str>);

pub(crate) fn build(rows: &[Row<'_>]) -> AnnotatedSentence {
    let tokens = rows
        .iter()
        .enumerate()
        .map(|(i, &(form, lemma, pos, head, dep, number))| {
            let token = AnnotatedToken::new(i, form, lemma, pos)
                .with_head(head)
                .with_dependency(dep);
            match number {
                Some(number) => token.with_feature("Number", number),
                None => token,
            }
        })
        .collect();
    AnnotatedSentence::new(tokens).expect("test sentence is well-formed")
}

/// "The quick brown fox jumps over the lazy dog."
pub(crate) fn fox_sentence() -> AnnotatedSentence {
    build(&[
        ("The", "the", Det, 3, "det", None),
        ("quick", "quick", Adj, 3, "amod", None),
        ("brown", "brown", Adj, 3, "amod", None),
        ("fox", "fox", Noun, 4, "nsubj", Some("Sing")),
        ("jumps", "jump", Verb, 4, "ROOT", None),
        ("over", "over", Adp, 4, "prep", None),
        ("the", "the", Det, 8, "det", None),
        ("lazy", "lazy", Adj, 8, "amod", None),
        ("dog", "dog", Noun, 5, "pobj", Some("Sing")),
        (".", ".", Punct, 4, "punct", None),
    ])
}

/// "The quick brown fox jumps over the lazy dogs."
pub(crate) fn dogs_sentence() -> AnnotatedSentence {
    build(&[
        ("The", "the", Det, 3, "det", None),
        ("quick", "quick", Adj, 3, "amod", None),
        ("brown", "brown", Adj, 3, "amod", None),
        ("fox", "fox", Noun, 4, "nsubj", Some("Sing")),
        ("jumps", "jump", Verb, 4, "ROOT", None),
        ("over", "over", Adp, 4, "prep", None),
        ("the", "the", Det, 8, "det", None),
        ("lazy", "lazy", Adj, 8, "amod", None),
        ("dogs", "dog", Noun, 5, "pobj", Some("Plur")),
        (".", ".", Punct, 4, "punct", None),
    ])
}

fn time_flies_rows() -> Vec<Row<'static>> {
    vec![
        ("Time", "time", Noun, 1, "nsubj", Some("Sing")),
        ("flies", "fly", Verb, 1, "ROOT", None),
        ("like", "like", Adp, 1, "prep", None),
        ("an", "an", Det, 4, "det", None),
        ("arrow", "arrow", Noun, 2, "pobj", Some("Sing")),
        (";", ";", Punct, 1, "punct", None),
        ("fruit", "fruit", Noun, 7, "compound", Some("Sing")),
        ("flies", "fly", Noun, 8, "nsubj", Some("Plur")),
        ("like", "like", Verb, 1, "conj", None),
        ("a", "a", Det, 10, "det", None),
        ("banana", "banana", Noun, 8, "dobj", Some("Sing")),
        (".", ".", Punct, 8, "punct", None),
    ]
}

/// "Time flies like an arrow; fruit flies like a banana."
pub(crate) fn time_flies_sentence() -> AnnotatedSentence {
    build(&time_flies_rows())
}

/// "Time flies like an arrow; fruit flies like a banana. People like these flies."
pub(crate) fn time_flies_people_sentence() -> AnnotatedSentence {
    let mut rows = time_flies_rows();
    rows.extend([
        ("People", "people", Noun, 13, "nsubj", Some("Plur")),
        ("like", "like", Verb, 13, "ROOT", None),
        ("these", "these", Det, 15, "det", None),
        ("flies", "fly", Noun, 13, "dobj", Some("Plur")),
        (".", ".", Punct, 13, "punct", None),
    ]);
    build(&rows)
}

/// "John, who lives in New York, likes apples."
pub(crate) fn john_sentence() -> AnnotatedSentence {
    build(&[
        ("John", "John", Propn, 8, "nsubj", Some("Sing")),
        (",", ",", Punct, 0, "punct", None),
        ("who", "who", Pron, 3, "nsubj", None),
        ("lives", "live", Verb, 0, "relcl", None),
        ("in", "in", Adp, 3, "prep", None),
        ("New", "New", Propn, 6, "compound", Some("Sing")),
        ("York", "York", Propn, 4, "pobj", Some("Sing")),
        (",", ",", Punct, 0, "punct", None),
        ("likes", "like", Verb, 8, "ROOT", None),
        ("apples", "apple", Noun, 8, "dobj", Some("Plur")),
        (".", ".", Punct, 8, "punct", None),
    ])
}

pub(crate) fn example<'a>(
    sentence: &'a AnnotatedSentence,
    lemmas: &'a [String],
    indices: &'a [usize],
) -> TrainingExample<'a> {
    TrainingExample {
        lemma: "example",
        lemmas,
        sentence,
        indices,
        pos: Verb,
    }
}
