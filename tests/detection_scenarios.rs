//! End-to-end training and detection scenarios.

mod common;

use mwe_detector::annotation::{NO_LABEL, PartOfSpeech};
use mwe_detector::detector::MweDetector;
use mwe_detector::error::Result;
use mwe_detector::filter::FilterId;
use mwe_detector::lexicon::{ActiveFilterConfig, ExpressionKey, MweEntry, MweLexicon, RankTable};

use common::{build, fox, time_flies, with_gold};

#[test]
fn test_fox_is_refound_with_every_filter() -> Result<()> {
    let gold = with_gold(&fox()?, &[1, 2, 3], "1:quick brown fox:VERB")?;

    let mut detector = MweDetector::new();
    let report = detector.train([&gold], None);
    assert_eq!(report.examples, 1);
    assert_eq!(report.skipped, 0);

    let detected = detector.detect(&fox()?);
    assert_eq!(
        detected.labels(),
        vec![
            NO_LABEL,
            "1:quick brown fox:VERB",
            "1:quick brown fox:VERB",
            "1:quick brown fox:VERB",
            NO_LABEL,
            NO_LABEL,
            NO_LABEL,
            NO_LABEL,
            NO_LABEL,
            NO_LABEL,
        ]
    );

    // The same tokens with the wrong tags are rejected by the tag filters.
    let entry = detector
        .lexicon()
        .get(&ExpressionKey::new("quick brown fox", PartOfSpeech::Verb))
        .expect("entry was trained");
    let sentence = fox()?;
    assert!(!FilterId::F1.test(&entry.evidence, &sentence, &[0, 1, 2]));
    assert!(!FilterId::F2.test(&entry.evidence, &sentence, &[0, 1, 2]));
    assert!(FilterId::F1.test(&entry.evidence, &sentence, &[1, 2, 3]));

    Ok(())
}

#[test]
fn test_gap_filter_rejects_wider_gap() -> Result<()> {
    let config = ActiveFilterConfig::new().with_filters(PartOfSpeech::Verb, [FilterId::F4]);
    let mut detector = MweDetector::with_lexicon(MweLexicon::new().with_active_filters(config));

    let gold = with_gold(&fox()?, &[0, 4, 8], "1:the jump dog:VERB")?;
    detector.train([&gold], None);

    // Gaps 3 and 5; the widest trained gap is 4.
    let wide = build(&[
        ("the", "the", PartOfSpeech::Det, 0, None),
        ("a", "a", PartOfSpeech::X, 0, None),
        ("b", "b", PartOfSpeech::X, 0, None),
        ("jumps", "jump", PartOfSpeech::Verb, 3, None),
        ("c", "c", PartOfSpeech::X, 3, None),
        ("d", "d", PartOfSpeech::X, 3, None),
        ("e", "e", PartOfSpeech::X, 3, None),
        ("f", "f", PartOfSpeech::X, 3, None),
        ("dog", "dog", PartOfSpeech::Noun, 3, None),
    ])?;
    assert!(detector.find_matches(&wide).is_empty());
    assert!(detector.detect(&wide).iter().all(|t| t.mwe == NO_LABEL));

    let refound = detector.find_matches(&fox()?);
    assert!(refound.iter().any(|m| m.indices == vec![0, 4, 8]));

    Ok(())
}

#[test]
fn test_closest_match_keeps_tightest_groups() -> Result<()> {
    let config = ActiveFilterConfig::new().with_filters(PartOfSpeech::Verb, [FilterId::F5]);
    let mut lexicon = MweLexicon::new().with_active_filters(config);
    lexicon.insert(
        ExpressionKey::new("fly like", PartOfSpeech::Verb),
        MweEntry::new(PartOfSpeech::Verb).with_lemmas(["fly", "like"]),
    );
    let detector = MweDetector::with_lexicon(lexicon);

    let sentence = time_flies()?;
    let matches = detector.find_matches(&sentence);
    let indices: Vec<Vec<usize>> = matches.iter().map(|m| m.indices.clone()).collect();
    assert_eq!(indices, vec![vec![1, 2], vec![7, 8]]);
    assert_eq!(matches[0].serial, 1);
    assert_eq!(matches[1].serial, 2);
    assert_eq!(matches[1].label(), "2:fly like:VERB");

    Ok(())
}

#[test]
fn test_serials_are_shared_across_entries() -> Result<()> {
    let config = ActiveFilterConfig::new()
        .with_filters(PartOfSpeech::Noun, [FilterId::F8])
        .with_filters(PartOfSpeech::Verb, [FilterId::F8]);
    let mut lexicon = MweLexicon::new().with_active_filters(config);
    lexicon.insert(
        ExpressionKey::new("fruit fly", PartOfSpeech::Noun),
        MweEntry::new(PartOfSpeech::Noun).with_lemmas(["fruit", "fly"]),
    );
    lexicon.insert(
        ExpressionKey::new("fly like", PartOfSpeech::Verb),
        MweEntry::new(PartOfSpeech::Verb).with_lemmas(["like", "fly"]),
    );
    let detector = MweDetector::with_lexicon(lexicon);

    let detected = detector.detect(&time_flies()?);
    let labels = detected.labels();

    // Key order: "fly like:VERB" < "fruit fly:NOUN". Nine discontinuous
    // matches for the verb entry come first, then the contiguous noun one.
    assert_eq!(labels[6], "10:fruit fly:NOUN");
    assert_eq!(
        labels[7],
        "4:fly like:VERB|6:fly like:VERB|7:fly like:VERB|10:fruit fly:NOUN"
    );
    assert_eq!(labels[0], NO_LABEL);

    Ok(())
}

#[test]
fn test_rank_table_orders_stored_lemmas() -> Result<()> {
    let gold = with_gold(&fox()?, &[1, 2, 3], "1:quick brown fox:VERB")?;
    let ranks = RankTable::from_pairs([("fox", 10), ("quick", 20)]);

    let mut detector = MweDetector::new();
    detector.train([&gold], Some(&ranks));

    let entry = detector
        .lexicon()
        .get(&ExpressionKey::from_raw("quick brown fox:VERB"))
        .expect("entry was trained");
    assert_eq!(entry.lemmas, vec!["fox", "quick", "brown"]);

    // Candidate generation does not depend on lemma order.
    let detected = detector.detect(&fox()?);
    assert_eq!(detected[1].mwe, "1:quick brown fox:VERB");

    Ok(())
}
