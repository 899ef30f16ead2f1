//! Directory batch workflow
//!
//! Filters every word file of a directory into a same-named file of an
//! output directory. Files are processed in parallel with rayon; reports
//! come back sorted by input file name.

use crate::app::filter::{FilterError, FilterEvent, FilterOptions, FilterStats, filter_file};
use crate::domain::properness::ProperClassifier;
use crate::infra::word_io::{WordIoError, list_word_files};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Result of filtering one file
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: Result<FilterStats, FilterError>,
}

/// Filter every regular file of `in_dir` into `out_dir`
///
/// A failure on one file is recorded in its report and does not stop the
/// other files. `on_event` is called from worker threads with the input
/// path of the file the event belongs to.
pub fn filter_directory<F>(
    in_dir: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    classifier: &ProperClassifier,
    options: &FilterOptions,
    on_event: F,
) -> Result<Vec<FileReport>, WordIoError>
where
    F: Fn(&Path, FilterEvent) + Sync,
{
    let out_dir = out_dir.as_ref();
    let inputs = list_word_files(in_dir)?;

    let reports = inputs
        .into_par_iter()
        .map(|input| {
            // list_word_files only yields entries that have a file name
            let output = out_dir.join(input.file_name().unwrap_or_default());
            let result = filter_file(&input, &output, classifier, options, |event| {
                on_event(&input, event)
            });
            FileReport {
                input,
                output,
                result,
            }
        })
        .collect();

    Ok(reports)
}
