//! CUPT reader.
//!
//! Sentences are separated by blank lines. Comment lines are ignored except
//! `# global.columns = ...`, which names the columns of the file. Without
//! that header the ten CoNLL-U columns are assumed, followed by the MWE
//! label column. Multiword token ranges (`1-2`) and empty nodes (`1.1`) are
//! skipped. `HEAD` is 1-based with `0` for the root, which is mapped to the
//! token's own index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::annotation::annotator::Annotator;
use crate::annotation::pos::PartOfSpeech;
use crate::annotation::sentence::AnnotatedSentence;
use crate::annotation::token::{AnnotatedToken, MorphFeatures, NO_LABEL};
use crate::error::{MweError, Result};

/// Position of the label column in files without a column header.
pub const DEFAULT_LABEL_INDEX: usize = 10;

const COLUMNS_HEADER: &str = "global.columns";
const EMPTY: &str = "_";

/// How to read a CUPT file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuptConfig {
    /// Name of the label column in `# global.columns`; `None` uses the
    /// column after MISC
    pub label_column: Option<String>,

    /// Label given to tokens whose label column is missing or `_`
    pub default_label: String,
}

impl Default for CuptConfig {
    fn default() -> Self {
        CuptConfig {
            label_column: None,
            default_label: NO_LABEL.to_string(),
        }
    }
}

impl CuptConfig {
    /// Read labels from the named column.
    pub fn with_label_column<S: Into<String>>(mut self, name: S) -> Self {
        self.label_column = Some(name.into());
        self
    }
}

/// Column positions of one file.
#[derive(Clone, Debug)]
struct Columns {
    id: usize,
    form: usize,
    lemma: usize,
    upos: usize,
    feats: usize,
    head: usize,
    deprel: usize,
    label: Option<usize>,
}

impl Columns {
    fn conllu() -> Self {
        Columns {
            id: 0,
            form: 1,
            lemma: 2,
            upos: 3,
            feats: 5,
            head: 6,
            deprel: 7,
            label: Some(DEFAULT_LABEL_INDEX),
        }
    }

    fn from_header(header: &str, config: &CuptConfig, line: usize) -> Result<Self> {
        let names: Vec<&str> = header.split_whitespace().collect();
        let find = |name: &str| {
            names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    MweError::annotation(format!("line {line}: column '{name}' missing from header"))
                })
        };

        let label = match &config.label_column {
            Some(name) => Some(names.iter().position(|n| n == name).ok_or_else(|| {
                MweError::config(format!("line {line}: no column named '{name}' in header"))
            })?),
            None => names
                .iter()
                .position(|n| n.eq_ignore_ascii_case("MISC"))
                .map(|misc| misc + 1)
                .filter(|&i| i < names.len()),
        };

        Ok(Columns {
            id: find("ID")?,
            form: find("FORM")?,
            lemma: find("LEMMA")?,
            upos: find("UPOS")?,
            feats: find("FEATS")?,
            head: find("HEAD")?,
            deprel: find("DEPREL")?,
            label,
        })
    }
}

/// Rows of the sentence being read.
struct PendingSentence {
    first_line: usize,
    rows: Vec<(usize, AnnotatedToken, Option<usize>)>,
}

/// Read every sentence of a CUPT stream.
pub fn read_cupt<R: BufRead>(reader: R, config: &CuptConfig) -> Result<Vec<AnnotatedSentence>> {
    let mut sentences = Vec::new();
    let mut columns: Option<Columns> = None;
    let mut pending: Option<PendingSentence> = None;
    let mut line_no = 0;

    for line in reader.lines() {
        line_no += 1;
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            if let Some(done) = pending.take() {
                sentences.push(finish_sentence(done)?);
            }
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if let Some((key, value)) = comment.split_once('=') {
                if key.trim() == COLUMNS_HEADER {
                    columns = Some(Columns::from_header(value, config, line_no)?);
                }
            }
            continue;
        }

        if columns.is_none() {
            if let Some(name) = &config.label_column {
                return Err(MweError::config(format!(
                    "line {line_no}: label column '{name}' requested but the file has no '# {COLUMNS_HEADER}' header"
                )));
            }
        }
        let layout = columns.get_or_insert_with(Columns::conllu);

        let fields: Vec<&str> = line.split('\t').collect();
        let id = field(&fields, layout.id, line_no)?;
        if id.contains('-') || id.contains('.') {
            continue;
        }

        let sentence = pending.get_or_insert_with(|| PendingSentence {
            first_line: line_no,
            rows: Vec::new(),
        });
        let position = sentence.rows.len();
        let (token, head) = parse_row(&fields, layout, config, position, line_no)?;
        sentence.rows.push((line_no, token, head));
    }

    if let Some(done) = pending.take() {
        sentences.push(finish_sentence(done)?);
    }

    debug!("Read {} sentences from {} lines", sentences.len(), line_no);
    Ok(sentences)
}

/// Parse CUPT text.
pub fn parse_cupt(text: &str, config: &CuptConfig) -> Result<Vec<AnnotatedSentence>> {
    read_cupt(text.as_bytes(), config)
}

/// Read a CUPT file.
pub fn load_cupt<P: AsRef<Path>>(path: P, config: &CuptConfig) -> Result<Vec<AnnotatedSentence>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let sentences = read_cupt(BufReader::new(file), config)?;
    info!("Loaded {} sentences from {}", sentences.len(), path.display());
    Ok(sentences)
}

fn field<'a>(fields: &[&'a str], index: usize, line: usize) -> Result<&'a str> {
    fields.get(index).copied().ok_or_else(|| {
        MweError::annotation(format!(
            "line {line}: expected at least {} columns, found {}",
            index + 1,
            fields.len()
        ))
    })
}

fn parse_row(
    fields: &[&str],
    columns: &Columns,
    config: &CuptConfig,
    position: usize,
    line: usize,
) -> Result<(AnnotatedToken, Option<usize>)> {
    let id: usize = field(fields, columns.id, line)?
        .parse()
        .map_err(|_| MweError::annotation(format!("line {line}: invalid token id")))?;
    if id != position + 1 {
        return Err(MweError::annotation(format!(
            "line {line}: token id {id} out of sequence, expected {}",
            position + 1
        )));
    }

    let upos = field(fields, columns.upos, line)?;
    let pos = if upos == EMPTY {
        PartOfSpeech::X
    } else {
        upos.parse()
            .map_err(|e| MweError::annotation(format!("line {line}: {e}")))?
    };

    let head = match field(fields, columns.head, line)? {
        EMPTY => None,
        raw => {
            let head: usize = raw
                .parse()
                .map_err(|_| MweError::annotation(format!("line {line}: invalid head '{raw}'")))?;
            if head == 0 { None } else { Some(head - 1) }
        }
    };

    let label = match columns.label.and_then(|i| fields.get(i)) {
        Some(&raw) if raw != EMPTY && !raw.is_empty() => raw.to_string(),
        _ => config.default_label.clone(),
    };

    let token = AnnotatedToken::new(
        position,
        field(fields, columns.form, line)?,
        field(fields, columns.lemma, line)?,
        pos,
    )
    .with_dependency(field(fields, columns.deprel, line)?)
    .with_morph(MorphFeatures::parse(field(fields, columns.feats, line)?))
    .with_mwe(label);

    Ok((token, head))
}

fn finish_sentence(pending: PendingSentence) -> Result<AnnotatedSentence> {
    let len = pending.rows.len();
    let mut tokens = Vec::with_capacity(len);
    for (line, token, head) in pending.rows {
        let token = match head {
            Some(head) if head >= len => {
                return Err(MweError::annotation(format!(
                    "line {line}: head {} outside a sentence of {len} tokens",
                    head + 1
                )));
            }
            Some(head) => token.with_head(head),
            None => token,
        };
        tokens.push(token);
    }
    AnnotatedSentence::new(tokens).map_err(|e| {
        MweError::annotation(format!("sentence at line {}: {e}", pending.first_line))
    })
}

/// An annotation backend that reads pre-annotated CUPT text.
///
/// Each call annotates one sentence; text holding several sentences is an
/// error.
#[derive(Clone, Debug, Default)]
pub struct CuptAnnotator {
    config: CuptConfig,
}

impl CuptAnnotator {
    /// Create an annotator with the given reader configuration.
    pub fn new(config: CuptConfig) -> Self {
        CuptAnnotator { config }
    }

    /// The reader configuration.
    pub fn config(&self) -> &CuptConfig {
        &self.config
    }
}

impl Annotator for CuptAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence> {
        let mut sentences = parse_cupt(text, &self.config)?;
        match sentences.len() {
            1 => Ok(sentences.remove(0)),
            0 => Err(MweError::annotation("no sentence in CUPT text")),
            n => Err(MweError::annotation(format!(
                "expected one sentence in CUPT text, found {n}"
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "cupt"
    }
}
