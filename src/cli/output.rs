//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{MweArgs, OutputFormat};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub language: String,
    pub path: String,
    pub sentences: usize,
    pub examples: usize,
    pub skipped: usize,
    pub entries: usize,
    pub duration_ms: u64,
}

/// One token of a labelled sentence.
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelledToken {
    pub form: String,
    pub lemma: String,
    pub label: String,
}

/// One labelled sentence.
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelledSentence {
    pub text: String,
    pub tokens: Vec<LabelledToken>,
}

/// Result structure for detection.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionResult {
    pub language: String,
    pub sentences: Vec<LabelledSentence>,
    pub labelled_tokens: usize,
    pub duration_ms: u64,
}

/// One lexicon entry, for listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntrySummary {
    pub key: String,
    pub lemmas: Vec<String>,
    pub max_gap: usize,
}

/// Lexicon statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconSummary {
    pub language: String,
    pub path: String,
    pub total_entries: usize,
    pub entries_by_pos: BTreeMap<String, usize>,
    pub active_filters: BTreeMap<String, Vec<String>>,
    pub entries: Option<Vec<EntrySummary>>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &MweArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &MweArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }
    println!("{message}");
    println!();

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("DetectionResult") => {
            output_detection_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("LexiconSummary") => {
            output_summary_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output labelled sentences as `form<TAB>label` lines.
fn output_detection_human(value: &serde_json::Value, _args: &MweArgs) -> Result<()> {
    if let Some(sentences) = value.get("sentences").and_then(|s| s.as_array()) {
        for sentence in sentences {
            if let Some(text) = sentence.get("text").and_then(|t| t.as_str()) {
                println!("# text = {text}");
            }
            if let Some(tokens) = sentence.get("tokens").and_then(|t| t.as_array()) {
                for (i, token) in tokens.iter().enumerate() {
                    println!(
                        "{}\t{}\t{}",
                        i + 1,
                        format_value(&token["form"]),
                        format_value(&token["label"])
                    );
                }
            }
            println!();
        }
    }
    if let Some(count) = value.get("labelled_tokens") {
        println!("Labelled tokens: {}", format_value(count));
    }
    Ok(())
}

/// Output lexicon statistics in human format.
fn output_summary_human(value: &serde_json::Value, _args: &MweArgs) -> Result<()> {
    println!("Lexicon: {}", format_value(&value["path"]));
    println!("Entries: {}", format_value(&value["total_entries"]));

    if let Some(by_pos) = value.get("entries_by_pos").and_then(|v| v.as_object()) {
        println!();
        println!("Entries by part of speech:");
        for (pos, count) in by_pos {
            println!("  {pos:<6} {}", format_value(count));
        }
    }

    if let Some(filters) = value.get("active_filters").and_then(|v| v.as_object()) {
        println!();
        if filters.is_empty() {
            println!("Active filters: all, for every part of speech");
        } else {
            println!("Active filters (other tags use all):");
            for (pos, ids) in filters {
                println!("  {pos:<6} {}", format_value(ids));
            }
        }
    }

    if let Some(entries) = value.get("entries").and_then(|v| v.as_array()) {
        println!();
        for entry in entries {
            println!(
                "  {}  {}  max gap {}",
                format_value(&entry["key"]),
                format_value(&entry["lemmas"]),
                format_value(&entry["max_gap"])
            );
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &MweArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MweArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
