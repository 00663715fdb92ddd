use polars::prelude::*;

use std::path::{Path, PathBuf};

use crate::error::{Result, RTreeError};
use super::sample_struct::*;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
///
/// By default, the last column is used as the target
/// and the file is assumed to have no header row.
///
/// # Example
/// ```no_run
/// use rtlearner::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("data/Istanbul.csv")
///     .has_header(true)
///     .drop_first_column(true)
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SampleReader {
    file: Option<PathBuf>,
    has_header: bool,
    drop_first_column: bool,
    target: Option<String>,
}


impl SampleReader {
    /// Construct a new instance of `SampleReader`.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the file name.
    pub fn file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the flag whether the first column is dropped or not.
    /// Use this for a leading index or date column.
    /// Default is `false.`
    pub fn drop_first_column(mut self, flag: bool) -> Self {
        self.drop_first_column = flag;
        self
    }


    /// Set the column name that is used for target value.
    /// If not set, the last column is the target.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = Some(column.as_ref().to_string());
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| RTreeError::invalid("the file name is not set"))?;

        let mut df = CsvReader::from_path(file)?
            .has_header(self.has_header)
            .finish()?;

        if self.drop_first_column {
            let first = df.get_column_names()
                .first()
                .map(|name| name.to_string())
                .ok_or_else(|| RTreeError::invalid("the file has no column"))?;
            let _ = df.drop_in_place(&first)?;
        }

        let target = match self.target {
            Some(name) => name,
            None => {
                df.get_column_names()
                    .last()
                    .map(|name| name.to_string())
                    .ok_or_else(|| {
                        RTreeError::invalid("the file has no target column")
                    })?
            },
        };
        let target = df.drop_in_place(&target)?;

        let mut sample = Sample::from_dataframe(df, target)?;

        // `polars` names the columns of a headerless file `column_1`, ...
        // Rename them as the rows-constructed samples do.
        if !self.has_header {
            sample.features = sample.features.into_iter()
                .enumerate()
                .map(|(i, feat)| {
                    let name = format!("Feat. [{}]", i + 1);
                    super::Feature::new(name, feat.into_vals())
                })
                .collect();
        }

        Ok(sample)
    }
}
