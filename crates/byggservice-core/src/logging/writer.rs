//! Append-only JSONL log files, one per day.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Appends entries to `<logs_dir>/<YYYY-MM-DD>.jsonl`
pub struct LogFileWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl LogFileWriter {
    /// Open today's log file, creating `logs_dir` if needed.
    pub fn new(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}.jsonl", date));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a single line and flush.
    pub fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

impl Drop for LogFileWriter {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}

/// Read every entry from the JSONL files in `logs_dir`, oldest file first.
///
/// Lines that don't parse are skipped.
pub fn read_entries(logs_dir: impl AsRef<Path>) -> std::io::Result<Vec<JsonLogEntry>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(logs_dir.as_ref())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "jsonl"))
        .collect();
    paths.sort();

    let mut entries = Vec::new();
    for path in paths {
        let reader = BufReader::new(File::open(&path)?);
        for line in reader.lines() {
            if let Ok(entry) = JsonLogEntry::from_json_line(&line?) {
                entries.push(entry);
            }
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let writer = LogFileWriter::new(&logs_dir).unwrap();
        writer
            .write(&JsonLogEntry::new("info", "test", "first"))
            .unwrap();
        writer
            .write(&JsonLogEntry::new("warn", "test", "second"))
            .unwrap();
        std::fs::write(logs_dir.join("garbage.jsonl"), "not json\n").unwrap();

        let entries = read_entries(&logs_dir).unwrap();
        let msgs: Vec<_> = entries.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(msgs, vec!["first", "second"]);
        assert!(writer.path().starts_with(&logs_dir));
    }
}
