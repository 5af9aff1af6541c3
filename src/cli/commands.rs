//! Command implementations for the mwe-detector CLI.

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::annotation::NO_LABEL;
use crate::annotation::normalizer::LemmaNormalizer;
use crate::annotation::sentence::AnnotatedSentence;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{CuptConfig, load_cupt};
use crate::detector::MweDetector;
use crate::error::Result;
use crate::lexicon::{LexiconStore, MweLexicon, RankTable};

/// Execute a CLI command.
pub fn execute_command(args: MweArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train_lexicon(train_args.clone(), &args),
        Command::Detect(detect_args) => detect_corpus(detect_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect_lexicon(inspect_args.clone(), &args),
    }
}

/// Train a lexicon and store it under its language.
fn train_lexicon(args: TrainArgs, cli_args: &MweArgs) -> Result<()> {
    let start_time = Instant::now();
    let store = LexiconStore::new(&args.model_dir);

    let lexicon = if args.update && store.contains(&args.lang) {
        store.load(&args.lang)?
    } else {
        MweLexicon::new()
    };
    let mut detector = MweDetector::with_lexicon(lexicon);
    for assignment in &args.filters {
        detector
            .lexicon_mut()
            .active_filters_mut()
            .set_filters(assignment.pos, assignment.filters.iter().copied());
    }

    let ranks = match &args.rank {
        Some(path) => {
            let ranks = RankTable::from_path(path)?;
            info!("Loaded {} lemma ranks from {}", ranks.len(), path.display());
            Some(ranks)
        }
        None => None,
    };

    let sentences = read_corpus(&args.corpus, args.label_column.clone(), &args.lang, args.normalize)?;
    let report = detector.train(&sentences, ranks.as_ref());
    detector.save(&store, &args.lang)?;

    output_result(
        "Lexicon trained successfully",
        &TrainingResult {
            language: args.lang.clone(),
            path: store.path_for(&args.lang).to_string_lossy().to_string(),
            sentences: report.sentences,
            examples: report.examples,
            skipped: report.skipped,
            entries: detector.lexicon().len(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Label every sentence of a corpus.
fn detect_corpus(args: DetectArgs, cli_args: &MweArgs) -> Result<()> {
    let start_time = Instant::now();
    let store = LexiconStore::new(&args.model_dir);
    let detector = MweDetector::load(&store, &args.lang)?;

    let sentences = read_corpus(&args.corpus, args.label_column.clone(), &args.lang, args.normalize)?;
    let detected = detector.detect_batch(&sentences);

    let sentences: Vec<LabelledSentence> = detected
        .iter()
        .map(|sentence| LabelledSentence {
            text: sentence.text(),
            tokens: sentence
                .iter()
                .map(|token| LabelledToken {
                    form: token.form.clone(),
                    lemma: token.lemma.clone(),
                    label: token.mwe.clone(),
                })
                .collect(),
        })
        .collect();
    let labelled_tokens = sentences
        .iter()
        .flat_map(|s| s.tokens.iter())
        .filter(|t| t.label != NO_LABEL)
        .count();

    output_result(
        "Detection finished",
        &DetectionResult {
            language: args.lang.clone(),
            sentences,
            labelled_tokens,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Summarize a stored lexicon.
fn inspect_lexicon(args: InspectArgs, cli_args: &MweArgs) -> Result<()> {
    let store = LexiconStore::new(&args.model_dir);
    let lexicon = store.load(&args.lang)?;

    let mut entries_by_pos: BTreeMap<String, usize> = BTreeMap::new();
    for (_, entry) in lexicon.entries() {
        *entries_by_pos.entry(entry.pos.to_string()).or_default() += 1;
    }

    let entries = args.entries.then(|| {
        lexicon
            .entries()
            .map(|(key, entry)| EntrySummary {
                key: key.to_string(),
                lemmas: entry.lemmas.clone(),
                max_gap: entry.evidence.f4.max(),
            })
            .collect()
    });

    output_result(
        "Lexicon summary",
        &LexiconSummary {
            language: args.lang.clone(),
            path: store.path_for(&args.lang).to_string_lossy().to_string(),
            total_entries: lexicon.len(),
            entries_by_pos,
            active_filters: lexicon.active_filters().to_record(),
            entries,
        },
        cli_args,
    )
}

/// Read a CUPT corpus, normalizing lemmas when asked.
fn read_corpus(
    path: &std::path::Path,
    label_column: Option<String>,
    language: &str,
    normalize: bool,
) -> Result<Vec<AnnotatedSentence>> {
    let config = CuptConfig {
        label_column,
        ..CuptConfig::default()
    };
    let mut sentences = load_cupt(path, &config)
        .with_context(|| format!("Failed to read corpus {}", path.display()))?;

    if normalize {
        let normalizer = LemmaNormalizer::for_language(language);
        for sentence in &mut sentences {
            normalizer.apply(sentence);
        }
    }
    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const CORPUS: &str = "\
1\tHe\the\tPRON\t_\t_\t2\tnsubj\t_\t_\t*
2\ttook\ttake\tVERB\t_\t_\t0\troot\t_\t_\t1:take off:VERB
3\tit\tit\tPRON\t_\t_\t2\tobj\t_\t_\t*
4\toff\toff\tADP\t_\t_\t2\tcompound:prt\t_\t_\t1:take off:VERB
";

    #[test]
    fn test_train_detect_inspect() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.path().join("train.cupt");
        std::fs::write(&corpus, CORPUS).unwrap();
        let models = dir.path().join("models");
        let corpus = corpus.to_str().unwrap();
        let models = models.to_str().unwrap();

        let args = MweArgs::try_parse_from([
            "mwe-detector", "-q", "train", "-c", corpus, "-l", "en", "-m", models,
            "--filters", "VERB=f1,f4",
        ])
        .unwrap();
        execute_command(args).unwrap();

        let lexicon = LexiconStore::new(models).load("en").unwrap();
        assert_eq!(lexicon.len(), 1);

        let args = MweArgs::try_parse_from([
            "mwe-detector", "-q", "detect", "-c", corpus, "-l", "en", "-m", models,
        ])
        .unwrap();
        execute_command(args).unwrap();

        let args = MweArgs::try_parse_from([
            "mwe-detector", "-q", "-f", "json", "inspect", "-l", "en", "-m", models, "--entries",
        ])
        .unwrap();
        execute_command(args).unwrap();
    }

    #[test]
    fn test_unreadable_corpus_names_path() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.path().join("absent.cupt");

        let args = MweArgs::try_parse_from([
            "mwe-detector",
            "-q",
            "train",
            "-c",
            corpus.to_str().unwrap(),
            "-l",
            "en",
            "-m",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let err = execute_command(args).unwrap_err();
        assert!(matches!(err, crate::error::MweError::Anyhow(_)));
        assert!(err.to_string().contains("absent.cupt"), "{err}");
        assert!(!LexiconStore::new(dir.path()).contains("en"));
    }

    #[test]
    fn test_detect_without_lexicon_fails() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.path().join("test.cupt");
        std::fs::write(&corpus, CORPUS).unwrap();

        let args = MweArgs::try_parse_from([
            "mwe-detector",
            "-q",
            "detect",
            "-c",
            corpus.to_str().unwrap(),
            "-l",
            "de",
            "-m",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let err = execute_command(args).unwrap_err();
        assert!(err.is_load_failure());
    }
}
