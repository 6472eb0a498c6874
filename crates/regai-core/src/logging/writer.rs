//! Append-only JSONL files, one per surface per day.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Appends entries to `<logs_dir>/raw/<date>_<instance>.jsonl`.
pub struct InstanceLogWriter {
    instance: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl InstanceLogWriter {
    pub fn new(logs_dir: impl AsRef<Path>, instance: impl Into<String>) -> std::io::Result<Self> {
        let instance = instance.into();
        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{}_{}.jsonl", date, instance));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            instance,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry and flush, so a crash loses at most the current line.
    pub fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let line = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl Drop for InstanceLogWriter {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}

/// Read back every entry under `logs_dir`, oldest first.
///
/// With `date` (`YYYY-MM-DD`) only that day's files are read. Lines that
/// fail to parse are skipped.
pub fn read_entries(
    logs_dir: impl AsRef<Path>,
    date: Option<&str>,
) -> std::io::Result<Vec<JsonLogEntry>> {
    let raw_dir = logs_dir.as_ref().join("raw");
    if !raw_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(&raw_dir)? {
        let path = dir_entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".jsonl") || date.is_some_and(|d| !name.starts_with(d)) {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        entries.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .filter_map(|line| JsonLogEntry::from_json_line(line).ok()),
        );
    }

    entries.sort_by(|a, b| a.ts.cmp(&b.ts));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_per_instance() {
        let temp = TempDir::new().unwrap();
        let writer = InstanceLogWriter::new(temp.path(), "desktop").unwrap();

        assert!(temp.path().join("raw").is_dir());
        assert!(writer.path().exists());
        assert!(writer.path().to_string_lossy().ends_with("_desktop.jsonl"));
        assert_eq!(writer.instance(), "desktop");
    }

    #[test]
    fn test_read_merges_instances() {
        let temp = TempDir::new().unwrap();
        let desktop = InstanceLogWriter::new(temp.path(), "desktop").unwrap();
        let cli = InstanceLogWriter::new(temp.path(), "cli").unwrap();

        desktop
            .write(&JsonLogEntry::new("info", "desktop", "regai", "Window opened"))
            .unwrap();
        cli.write(&JsonLogEntry::new("error", "cli", "regai", "Plan request failed"))
            .unwrap();
        std::fs::write(temp.path().join("raw").join("notes.txt"), "ignored").unwrap();
        drop(desktop);
        drop(cli);

        let entries = read_entries(temp.path(), None).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.iter().filter(|e| e.is_error()).count(), 1);

        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(read_entries(temp.path(), Some(&today)).unwrap().len(), 2);
        assert!(read_entries(temp.path(), Some("1999-01-01")).unwrap().is_empty());
    }

    #[test]
    fn test_skips_garbage_lines() {
        let temp = TempDir::new().unwrap();
        let writer = InstanceLogWriter::new(temp.path(), "cli").unwrap();
        writer
            .write(&JsonLogEntry::new("info", "cli", "regai", "ok"))
            .unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(writer.path())
            .and_then(|mut f| writeln!(f, "{{truncated"))
            .unwrap();

        let entries = read_entries(temp.path(), None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].msg, "ok");
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(read_entries(temp.path().join("nope"), None).unwrap().is_empty());
    }
}
