use std::fs;
use std::io;
use std::path::PathBuf;

use eyre::{Result, WrapErr};

/// A persisted log of successful calculations
///
/// The store is host-owned and explicit: whoever needs the history gets
/// a handle to this object and calls `append`. The whole file is read
/// once at load and rewritten on every append. Records are stored one
/// per line as tab-separated `expression<TAB>result`.
#[derive(Debug)]
pub struct History {
    path:    PathBuf,
    entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result:     String,
}

impl History {
    /// Load the history from `path`; a missing file is an empty history
    pub fn load(path: PathBuf) -> Result<Self> {
        let entries = match fs::read_to_string(&path) {
            Ok(data) => parse_entries(&data),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err)
                    .wrap_err_with(|| format!("failed to read history file {}", path.display()))
            },
        };

        Ok(Self { path, entries })
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Record a calculation and rewrite the backing file
    pub fn append(&mut self, expression: &str, result: &str) -> Result<()> {
        self.entries.push(HistoryEntry {
            expression: expression.to_string(),
            result:     result.to_string(),
        });

        self.write()
    }

    fn write(&self) -> Result<()> {
        let data = self
            .entries
            .iter()
            .map(|entry| format!("{}\t{}\n", entry.expression, entry.result))
            .collect::<String>();

        fs::write(&self.path, data)
            .wrap_err_with(|| format!("failed to write history file {}", self.path.display()))
    }
}

fn parse_entries(data: &str) -> Vec<HistoryEntry> {
    data.lines()
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((expression, result)) => HistoryEntry {
                expression: expression.to_string(),
                result:     result.to_string(),
            },
            None => HistoryEntry {
                expression: line.to_string(),
                result:     String::new(),
            },
        })
        .collect()
}
