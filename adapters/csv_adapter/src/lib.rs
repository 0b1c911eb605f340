use cookie_core::domain::RawRow;
use cookie_core::error::CookieLogError;
use cookie_core::ports::{LogSource, Result, RowIter};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const CSV_EXTENSION: &str = "csv";
const BOM: char = '\u{feff}';

/// Checks that `path` names an existing regular file ending in `.csv` (lowercase).
///
/// This is the caller-side check run before a scan; the scan itself still
/// reports a file that disappears in the meantime.
pub fn check_log_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)
        .map_err(|e| CookieLogError::io(path, format!("checking {}", path.display()), e))?;
    if !metadata.is_file() {
        return Err(CookieLogError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if path.extension() != Some(OsStr::new(CSV_EXTENSION)) {
        return Err(CookieLogError::NotCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(path.to_path_buf())
}

/// Cookie log stored as a comma-separated text file
pub struct CsvLogSource {
    path: PathBuf,
}

impl CsvLogSource {
    /// Creates a source for `path` without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a source after running `check_log_file` on `path`
    pub fn open_checked(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(check_log_file(path)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for CsvLogSource {
    fn rows(&self) -> Result<RowIter<'_>> {
        let file = File::open(&self.path).map_err(|e| {
            CookieLogError::io(&self.path, format!("opening {}", self.path.display()), e)
        })?;

        // Every row, header included, goes to the core; field counts are checked there
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file)
            .into_records();

        Ok(Box::new(CsvRows {
            path: &self.path,
            records,
            first: true,
        }))
    }
}

/// Streams the records of an open log file as raw rows.
/// Blank lines are skipped by the reader. The file is closed when this is dropped.
struct CsvRows<'a> {
    path: &'a Path,
    records: StringRecordsIntoIter<File>,
    first: bool,
}

impl Iterator for CsvRows<'_> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(csv_error(self.path, e))),
        };

        let line = record.position().map_or(0, |pos| pos.line() as usize);
        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();

        if std::mem::take(&mut self.first) {
            if let Some(name) = fields.first_mut() {
                if let Some(stripped) = name.strip_prefix(BOM) {
                    *name = stripped.to_string();
                }
            }
        }

        Some(Ok(RawRow::new(line, fields)))
    }
}

fn csv_error(path: &Path, e: csv::Error) -> CookieLogError {
    let line = e.position().map_or(0, |pos| pos.line() as usize);
    let reason = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(source) => {
            CookieLogError::io(path, format!("reading {}", path.display()), source)
        }
        _ => CookieLogError::MalformedRecord { line, reason },
    }
}
