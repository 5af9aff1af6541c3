//! Integration tests for lexicon persistence.

mod common;

use mwe_detector::annotation::PartOfSpeech;
use mwe_detector::detector::MweDetector;
use mwe_detector::error::{MweError, Result};
use mwe_detector::filter::FilterId;
use mwe_detector::lexicon::{ActiveFilterConfig, ExpressionKey, LexiconStore, MweLexicon};
use tempfile::TempDir;

use common::{fox, time_flies, with_gold};

fn trained_detector() -> Result<MweDetector> {
    let config = ActiveFilterConfig::new()
        .with_filters(PartOfSpeech::Noun, [FilterId::F1, FilterId::F7])
        .with_filters(PartOfSpeech::Adv, []);
    let mut detector = MweDetector::with_lexicon(MweLexicon::new().with_active_filters(config));

    let gold = [
        with_gold(&fox()?, &[1, 2, 3], "1:quick brown fox:VERB")?,
        with_gold(&fox()?, &[0, 4, 8], "1:the jump dog:VERB")?,
        with_gold(&time_flies()?, &[6, 7], "1:fruit fly:NOUN")?,
    ];
    let report = detector.train(&gold, None);
    assert_eq!(report.examples, 3);
    Ok(detector)
}

#[test]
fn test_round_trip_preserves_detection() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = LexiconStore::new(temp_dir.path().join("models"));

    let detector = trained_detector()?;
    detector.save(&store, "en")?;
    assert!(store.path_for("en").ends_with("en_data.json"));

    let reloaded = MweDetector::load(&store, "en")?;
    assert_eq!(reloaded.lexicon(), detector.lexicon());
    assert_eq!(
        reloaded.lexicon().filters_for(PartOfSpeech::Noun),
        &[FilterId::F1, FilterId::F7]
    );
    assert!(reloaded.lexicon().filters_for(PartOfSpeech::Adv).is_empty());

    for sentence in [fox()?, time_flies()?] {
        assert_eq!(
            reloaded.detect(&sentence).labels(),
            detector.detect(&sentence).labels()
        );
    }

    Ok(())
}

#[test]
fn test_persisted_evidence_layout() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = LexiconStore::new(temp_dir.path());
    trained_detector()?.save(&store, "en")?;

    let raw = std::fs::read_to_string(store.path_for("en"))?;
    let json: serde_json::Value = serde_json::from_str(&raw)?;

    let entry = &json["mwes"]["the jump dog:VERB"];
    assert_eq!(entry["POS"], "VERB");
    assert_eq!(entry["lemmas"], serde_json::json!(["the", "jump", "dog"]));
    assert_eq!(entry["f1"], serde_json::json!([["DET", "NOUN", "VERB"]]));
    assert_eq!(entry["f2"], serde_json::json!([["DET", "VERB", "NOUN"]]));
    assert_eq!(entry["f4"], serde_json::json!([1, 4]));
    assert_eq!(entry["f7"], serde_json::json!(["Sing"]));
    assert!(entry["f5"].is_null());
    assert!(entry["f6"].is_null());

    let noun = &json["mwes"]["fruit fly:NOUN"];
    assert_eq!(noun["f3"], serde_json::json!([["NOUN", "NOUN"]]));
    assert_eq!(noun["f7"], serde_json::json!([]));

    assert_eq!(json["active_filters"]["NOUN"], serde_json::json!(["f1", "f7"]));
    assert_eq!(json["active_filters"]["ADV"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_unknown_filter_id_fails_fast() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = LexiconStore::new(temp_dir.path());
    std::fs::write(
        store.path_for("fr"),
        r#"{"mwes": {}, "active_filters": {"NOUN": ["f1", "f42"]}}"#,
    )?;

    let err = MweDetector::load(&store, "fr").unwrap_err();
    assert!(matches!(err, MweError::Config(_)), "{err}");
    assert!(err.is_load_failure());

    Ok(())
}

#[test]
fn test_missing_language_fails() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = LexiconStore::new(temp_dir.path());
    trained_detector()?.save(&store, "en")?;

    let err = MweDetector::load(&store, "pl").unwrap_err();
    assert!(matches!(err, MweError::MissingLexicon(_)), "{err}");
    assert_eq!(store.languages()?, vec!["en".to_string()]);

    Ok(())
}

#[test]
fn test_loads_hand_written_lexicon() -> Result<()> {
    let json = r#"{
        "mwes": {
            "fruit fly:NOUN": {
                "POS": "NOUN",
                "lemmas": ["fruit", "fly"],
                "f1": [["NOUN", "NOUN"]],
                "f2": [["NOUN", "NOUN"]],
                "f3": [["NOUN", "NOUN"]],
                "f4": [1],
                "f5": null,
                "f6": null,
                "f7": ["Plur"],
                "f8": null
            }
        },
        "active_filters": {}
    }"#;
    let lexicon = MweLexicon::read_json(json.as_bytes())?;
    let entry = lexicon
        .get(&ExpressionKey::new("fruit fly", PartOfSpeech::Noun))
        .expect("entry is present");
    assert!(entry.evidence.f7.contains("Plur"));

    let detected = MweDetector::with_lexicon(lexicon).detect(&time_flies()?);
    assert_eq!(detected[6].mwe, "1:fruit fly:NOUN");
    assert_eq!(detected[7].mwe, "1:fruit fly:NOUN");

    Ok(())
}
