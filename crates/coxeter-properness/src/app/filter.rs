//! Word filtering workflow
//!
//! Streams lines through parse -> classify -> write. Unparsable lines and
//! words that do not belong to the group are skipped with an event; a bound
//! lookup failure aborts the run. Output order always mirrors input order.

use crate::constants::PROGRESS_INTERVAL;
use crate::domain::bound::BoundError;
use crate::domain::coxeter::GroupError;
use crate::domain::properness::{ClassifyError, ProperClassifier};
use crate::domain::word::WordParser;
use crate::infra::word_io::{WordIoError, create_output, open_input, write_word};
use rayon::prelude::*;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// Filter options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    /// Skip words that are not reduced expressions
    pub require_reduced: bool,
    /// Lines per parallel batch (None = sequential)
    pub batch_size: Option<usize>,
    /// Lines between progress events (0 = no progress events)
    pub progress_interval: u64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::sequential()
    }
}

impl FilterOptions {
    /// Create options for line-by-line processing
    pub fn sequential() -> Self {
        Self {
            require_reduced: false,
            batch_size: None,
            progress_interval: PROGRESS_INTERVAL,
        }
    }

    /// Create options for batched rayon processing
    pub fn parallel(batch_size: usize) -> Self {
        Self {
            batch_size: Some(batch_size.max(1)),
            ..Self::sequential()
        }
    }

    pub fn with_require_reduced(mut self, require_reduced: bool) -> Self {
        self.require_reduced = require_reduced;
        self
    }
}

/// Why a line produced no decision
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Line has no digits
    Unparsable,
    /// Word contains a generator outside the group
    Invalid(GroupError),
    /// Word is not reduced (only with `require_reduced`)
    NotReduced,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable => write!(f, "no generator digits"),
            Self::Invalid(e) => write!(f, "{}", e),
            Self::NotReduced => write!(f, "not a reduced word"),
        }
    }
}

/// Events reported while filtering
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEvent {
    /// `lines` lines processed so far
    Progress { lines: u64 },
    /// A line was skipped (1-based line number, line without terminator)
    Skipped {
        line_number: u64,
        line: String,
        reason: SkipReason,
    },
}

/// Filter run summary
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines: u64,
    pub unparsable: u64,
    pub invalid: u64,
    pub not_reduced: u64,
    pub accepted: u64,
    pub rejected: u64,
}

impl FilterStats {
    pub fn skipped(&self) -> u64 {
        self.unparsable + self.invalid + self.not_reduced
    }

    pub fn merge(&mut self, other: &FilterStats) {
        self.lines += other.lines;
        self.unparsable += other.unparsable;
        self.invalid += other.invalid;
        self.not_reduced += other.not_reduced;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
    }
}

/// Filter errors (all abort the run)
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Files(#[from] WordIoError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Bound(#[from] BoundError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Decision {
    Accept,
    Reject,
    Skip(SkipReason),
}

fn decide(
    classifier: &ProperClassifier,
    require_reduced: bool,
    word: &[u8],
) -> Result<Decision, BoundError> {
    if require_reduced {
        match classifier.group().is_reduced(word) {
            Ok(true) => {}
            Ok(false) => return Ok(Decision::Skip(SkipReason::NotReduced)),
            Err(e) => return Ok(Decision::Skip(SkipReason::Invalid(e))),
        }
    }

    match classifier.is_proper(word) {
        Ok(true) => Ok(Decision::Accept),
        Ok(false) => Ok(Decision::Reject),
        Err(ClassifyError::Group(e)) => Ok(Decision::Skip(SkipReason::Invalid(e))),
        Err(ClassifyError::Bound(e)) => Err(e),
    }
}

fn display_line(raw: &[u8]) -> String {
    let trimmed = raw
        .strip_suffix(b"\n")
        .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
        .unwrap_or(raw);
    String::from_utf8_lossy(trimmed).into_owned()
}

/// Bookkeeping shared by the sequential and parallel paths
struct Tally<'a, F: FnMut(FilterEvent)> {
    stats: FilterStats,
    progress_interval: u64,
    on_event: &'a mut F,
}

impl<F: FnMut(FilterEvent)> Tally<'_, F> {
    fn record(&mut self, raw: &[u8], decision: Decision) {
        self.stats.lines += 1;
        match decision {
            Decision::Accept => self.stats.accepted += 1,
            Decision::Reject => self.stats.rejected += 1,
            Decision::Skip(reason) => {
                match reason {
                    SkipReason::Unparsable => self.stats.unparsable += 1,
                    SkipReason::Invalid(_) => self.stats.invalid += 1,
                    SkipReason::NotReduced => self.stats.not_reduced += 1,
                }
                (self.on_event)(FilterEvent::Skipped {
                    line_number: self.stats.lines,
                    line: display_line(raw),
                    reason,
                });
            }
        }

        if self.progress_interval > 0 && self.stats.lines % self.progress_interval == 0 {
            (self.on_event)(FilterEvent::Progress {
                lines: self.stats.lines,
            });
        }
    }
}

/// Filter words from `reader`, writing proper ones to `writer`
///
/// `on_event` receives skip diagnostics and progress, in input order.
pub fn filter_words<R, W, F>(
    mut reader: R,
    writer: &mut W,
    classifier: &ProperClassifier,
    options: &FilterOptions,
    mut on_event: F,
) -> Result<FilterStats, FilterError>
where
    R: BufRead,
    W: Write,
    F: FnMut(FilterEvent),
{
    let mut tally = Tally {
        stats: FilterStats::default(),
        progress_interval: options.progress_interval,
        on_event: &mut on_event,
    };

    match options.batch_size {
        None => filter_sequential(&mut reader, writer, classifier, options, &mut tally)?,
        Some(batch_size) => {
            filter_parallel(&mut reader, writer, classifier, options, batch_size, &mut tally)?
        }
    }

    writer.flush()?;
    Ok(tally.stats)
}

fn filter_sequential<R: BufRead, W: Write, F: FnMut(FilterEvent)>(
    reader: &mut R,
    writer: &mut W,
    classifier: &ProperClassifier,
    options: &FilterOptions,
    tally: &mut Tally<'_, F>,
) -> Result<(), FilterError> {
    let mut parser = WordParser::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let decision = match parser.parse_into(&line) {
            None => Decision::Skip(SkipReason::Unparsable),
            Some(word) => {
                let decision = decide(classifier, options.require_reduced, word)?;
                if decision == Decision::Accept {
                    write_word(writer, word)?;
                }
                decision
            }
        };

        tally.record(&line, decision);
    }

    Ok(())
}

fn filter_parallel<R: BufRead, W: Write, F: FnMut(FilterEvent)>(
    reader: &mut R,
    writer: &mut W,
    classifier: &ProperClassifier,
    options: &FilterOptions,
    batch_size: usize,
    tally: &mut Tally<'_, F>,
) -> Result<(), FilterError> {
    let mut batch: Vec<Vec<u8>> = Vec::with_capacity(batch_size);

    loop {
        batch.clear();
        for _ in 0..batch_size {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            batch.push(line);
        }
        if batch.is_empty() {
            break;
        }

        // Lines before a bound failure are still written and recorded
        let decisions: Vec<Result<(Decision, Option<Vec<u8>>), BoundError>> = batch
            .par_iter()
            .map_init(
                WordParser::new,
                |parser, line| -> Result<(Decision, Option<Vec<u8>>), BoundError> {
                    match parser.parse_into(line) {
                        None => Ok((Decision::Skip(SkipReason::Unparsable), None)),
                        Some(word) => {
                            let decision = decide(classifier, options.require_reduced, word)?;
                            let kept = (decision == Decision::Accept).then(|| word.to_vec());
                            Ok((decision, kept))
                        }
                    }
                },
            )
            .collect();

        for (line, result) in batch.iter().zip(decisions) {
            let (decision, kept) = result?;
            if let Some(word) = kept {
                write_word(writer, &word)?;
            }
            tally.record(line, decision);
        }
    }

    Ok(())
}

/// Filter one word file into another
pub fn filter_file<F: FnMut(FilterEvent)>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    classifier: &ProperClassifier,
    options: &FilterOptions,
    on_event: F,
) -> Result<FilterStats, FilterError> {
    let reader = open_input(input)?;
    let mut writer = create_output(output)?;
    filter_words(reader, &mut writer, classifier, options, on_event)
}
