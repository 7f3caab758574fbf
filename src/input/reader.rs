use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[derive(Debug, Clone)]
pub struct CsvRow {
    /// Line on which the record starts; quoted fields may span several.
    pub line_no: usize,
    pub fields: StringRecord,
}

/// A header-indexed CSV file held in memory.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub name: String,
    columns: HashMap<String, usize>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    pub fn read(path: &Path) -> Result<Self, InputError> {
        let reader = open_maybe_gz(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_reader(&name, reader)
    }

    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self, InputError> {
        let csv_error = |source: csv::Error| InputError::Csv {
            file: name.to_string(),
            source,
        };
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = reader.headers().map_err(csv_error)?.clone();
        if headers.iter().all(str::is_empty) {
            return Err(InputError::Empty(name.to_string()));
        }
        let mut columns = HashMap::new();
        for (idx, col) in headers.iter().enumerate() {
            let col = col.trim_start_matches('\u{feff}').to_ascii_lowercase();
            columns.entry(col).or_insert(idx);
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let fields = result.map_err(csv_error)?;
            let line_no = fields
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default();
            rows.push(CsvRow { line_no, fields });
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn require(&self, name: &str) -> Result<usize, InputError> {
        self.column(name).ok_or_else(|| InputError::MissingColumn {
            file: self.name.clone(),
            column: name.to_string(),
        })
    }
}

impl CsvRow {
    /// Non-empty field, or `None` for a missing column, blank cell or `nan`.
    pub fn get(&self, idx: Option<usize>) -> Option<&str> {
        idx.and_then(|i| self.fields.get(i))
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("nan"))
    }

    pub fn text(&self, idx: usize) -> Option<&str> {
        self.get(Some(idx))
    }

    pub fn number(&self, idx: Option<usize>) -> Option<f64> {
        self.get(idx).and_then(|s| s.parse::<f64>().ok())
    }

    /// Integer cell; accepts `12` and `12.0` since upstream exports floats.
    pub fn count(&self, idx: Option<usize>) -> Option<u32> {
        let raw = self.get(idx)?;
        if let Ok(v) = raw.parse::<u32>() {
            return Some(v);
        }
        let v = raw.parse::<f64>().ok()?;
        if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
            Some(v as u32)
        } else {
            None
        }
    }
}
