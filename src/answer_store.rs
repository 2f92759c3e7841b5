use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

pub const DEFAULT_ANSWER_FILENAME: &'static str = "CalcAns.txt";

#[derive(Debug, PartialEq)]
pub enum StoreError {
    /// The record doesn't exist or couldn't be read.
    Missing,
    /// The record exists but doesn't start with a number. A freshly
    /// cleared record is in this state.
    Corrupt,
    Unwritable(io::ErrorKind),
}

impl Error for StoreError {}

impl Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Missing => write!(f, "no saved answer"),
            StoreError::Corrupt => write!(f, "saved answer is not a number"),
            StoreError::Unwritable(kind) => write!(f, "unable to write saved answer ({kind})"),
        }
    }
}

/// A place to keep the most recent answer between invocations.
pub trait AnswerStore {
    fn load(&self) -> Result<f64, StoreError>;

    /// Replaces any existing answer with the given one.
    fn save(&mut self, value: f64) -> Result<(), StoreError>;

    /// Empties the record, after which `load()` will report it as corrupt.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Formats an answer the way it's written to a record.
pub fn serialize_answer(value: f64) -> String {
    format!("{:.6}", value)
}

/// Reads an answer from the contents of a record. Only the first word
/// is considered, so surrounding whitespace and anything after the
/// number are ignored.
pub fn deserialize_answer<T: AsRef<str>>(contents: T) -> Result<f64, StoreError> {
    let Some(word) = contents.as_ref().split_whitespace().next() else {
        return Err(StoreError::Corrupt);
    };
    word.parse::<f64>().map_err(|_| StoreError::Corrupt)
}

pub struct FileAnswerStore {
    path: PathBuf,
}

impl FileAnswerStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileAnswerStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn overwrite(&self, contents: &[u8]) -> Result<(), StoreError> {
        let mut file = File::create(&self.path).map_err(|err| StoreError::Unwritable(err.kind()))?;
        file.write_all(contents)
            .map_err(|err| StoreError::Unwritable(err.kind()))
    }
}

impl Default for FileAnswerStore {
    fn default() -> Self {
        FileAnswerStore::new(DEFAULT_ANSWER_FILENAME)
    }
}

impl AnswerStore for FileAnswerStore {
    fn load(&self) -> Result<f64, StoreError> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return Err(StoreError::Missing);
        };
        deserialize_answer(contents)
    }

    fn save(&mut self, value: f64) -> Result<(), StoreError> {
        self.overwrite(serialize_answer(value).as_bytes())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.overwrite(&[])
    }
}

/// Keeps the record in memory, which is mostly useful for tests.
#[derive(Debug, Default)]
pub struct MemoryAnswerStore {
    /// The raw contents of the record, or `None` if it doesn't exist.
    pub contents: Option<String>,
    /// When set, all writes fail as if the record were read-only.
    pub read_only: bool,
}

impl MemoryAnswerStore {
    pub fn with_contents<T: Into<String>>(contents: T) -> Self {
        MemoryAnswerStore {
            contents: Some(contents.into()),
            read_only: false,
        }
    }

    fn overwrite(&mut self, contents: String) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unwritable(io::ErrorKind::PermissionDenied));
        }
        self.contents = Some(contents);
        Ok(())
    }
}

impl AnswerStore for MemoryAnswerStore {
    fn load(&self) -> Result<f64, StoreError> {
        match &self.contents {
            Some(contents) => deserialize_answer(contents),
            None => Err(StoreError::Missing),
        }
    }

    fn save(&mut self, value: f64) -> Result<(), StoreError> {
        self.overwrite(serialize_answer(value))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.overwrite(String::new())
    }
}
