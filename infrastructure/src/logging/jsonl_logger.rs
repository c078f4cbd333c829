//! Append-only JSONL trail of hierarchy change decisions.
//!
//! One line per [`AuditEvent`]:
//!
//! ```json
//! {"schema":1,"type":"hierarchy_changed","timestamp":"2026-10-19T14:30:00.000Z","task_id":"t1",...}
//! ```
//!
//! Object payloads are flattened into the line; anything else goes under
//! `data`. With a size limit set, a line that would push the file past it
//! first moves the current file to `<name>.1` (replacing the previous one).

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};
use workly_application::ports::audit_log::{AuditEvent, AuditLog};

/// Version of the line layout, written as `schema` on every record.
pub const AUDIT_SCHEMA_VERSION: u32 = 1;

struct AuditFile {
    writer: BufWriter<File>,
    written: u64,
}

/// JSONL audit logger with optional size-based rotation.
///
/// Thread-safe via `Mutex`. Flushes on `Drop`.
pub struct JsonlAuditLogger {
    file: Mutex<AuditFile>,
    path: PathBuf,
    max_bytes: Option<u64>,
}

impl JsonlAuditLogger {
    /// Open the log at the given path for appending.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match open_append(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Some(Self {
            file: Mutex::new(AuditFile {
                writer: BufWriter::new(file),
                written,
            }),
            path: path.to_path_buf(),
            max_bytes: None,
        })
    }

    /// Rotate once the file would grow past `max_bytes`. Zero disables rotation.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes).filter(|max| *max > 0);
        self
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the previous file goes on rotation.
    pub fn rotated_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".1");
        self.path.with_file_name(name)
    }

    fn rotate(&self, file: &mut AuditFile) -> std::io::Result<()> {
        file.writer.flush()?;
        let rotated = self.rotated_path();
        std::fs::rename(&self.path, &rotated)?;
        *file = AuditFile {
            writer: BufWriter::new(open_append(&self.path)?),
            written: 0,
        };
        debug!("Rotated audit log to {}", rotated.display());
        Ok(())
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn encode(event: AuditEvent) -> Option<String> {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let mut record = match event.payload {
        serde_json::Value::Object(map) => map,
        other => {
            let mut map = serde_json::Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    record.insert("schema".to_string(), AUDIT_SCHEMA_VERSION.into());
    record.insert("type".to_string(), event.event_type.into());
    record.insert("timestamp".to_string(), timestamp.into());

    serde_json::to_string(&record).ok()
}

impl AuditLog for JsonlAuditLogger {
    fn record(&self, event: AuditEvent) {
        let Some(line) = encode(event) else {
            return;
        };
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        let len = line.len() as u64 + 1;

        if let Some(max) = self.max_bytes
            && file.written > 0
            && file.written + len > max
            && let Err(e) = self.rotate(&mut file)
        {
            warn!("Audit log rotation of {} failed: {}", self.path.display(), e);
        }

        match writeln!(file.writer, "{}", line).and_then(|_| file.writer.flush()) {
            Ok(()) => file.written += len,
            Err(e) => warn!("Audit log write to {} failed: {}", self.path.display(), e),
        }
    }
}

impl Drop for JsonlAuditLogger {
    fn drop(&mut self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn changed(task_id: &str) -> AuditEvent {
        AuditEvent::new(
            "hierarchy_changed",
            serde_json::json!({ "task_id": task_id }),
        )
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit").join("workly.audit.jsonl");
        let logger = JsonlAuditLogger::new(&path).unwrap();

        logger.record(AuditEvent::new(
            "hierarchy_changed",
            serde_json::json!({
                "task_id": "t1",
                "to": { "hierarchyType": "project_only", "projectId": "p1" },
            }),
        ));
        logger.record(AuditEvent::new(
            "hierarchy_change_rejected",
            serde_json::json!({ "task_id": "t2", "errors": ["completed"] }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
            assert_eq!(line["schema"], AUDIT_SCHEMA_VERSION);
        }
        assert_eq!(lines[0]["type"], "hierarchy_changed");
        assert_eq!(lines[0]["to"]["projectId"], "p1");
        assert_eq!(lines[1]["type"], "hierarchy_change_rejected");
        assert_eq!(lines[1]["errors"][0], "completed");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        for id in ["a", "b"] {
            JsonlAuditLogger::new(&path).unwrap().record(changed(id));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["task_id"], "b");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = JsonlAuditLogger::new(&path).unwrap();

        logger.record(AuditEvent::new("note", serde_json::json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_payload_cannot_override_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = JsonlAuditLogger::new(&path).unwrap();

        logger.record(AuditEvent::new(
            "hierarchy_changed",
            serde_json::json!({ "type": "forged", "schema": 99 }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "hierarchy_changed");
        assert_eq!(lines[0]["schema"], AUDIT_SCHEMA_VERSION);
    }

    #[test]
    fn test_rotates_past_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workly.audit.jsonl");
        // every line exceeds the limit, so each record starts a new file
        let logger = JsonlAuditLogger::new(&path).unwrap().with_max_bytes(1);
        assert_eq!(
            logger.rotated_path(),
            dir.path().join("workly.audit.jsonl.1")
        );

        for id in ["t1", "t2", "t3"] {
            logger.record(changed(id));
        }
        drop(logger);

        let current = read_lines(&path);
        let previous = read_lines(&dir.path().join("workly.audit.jsonl.1"));
        assert_eq!(current.len(), 1);
        assert_eq!(current[0]["task_id"], "t3");
        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0]["task_id"], "t2");
    }

    #[test]
    fn test_existing_size_counts_toward_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        JsonlAuditLogger::new(&path).unwrap().record(changed("old"));

        let logger = JsonlAuditLogger::new(&path).unwrap().with_max_bytes(1);
        logger.record(changed("new"));
        drop(logger);

        assert_eq!(read_lines(&path)[0]["task_id"], "new");
        assert_eq!(
            read_lines(&dir.path().join("audit.jsonl.1"))[0]["task_id"],
            "old"
        );
    }

    #[test]
    fn test_zero_limit_never_rotates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = JsonlAuditLogger::new(&path).unwrap().with_max_bytes(0);
        logger.record(changed("a"));
        logger.record(changed("b"));
        drop(logger);

        assert_eq!(read_lines(&path).len(), 2);
        assert!(!dir.path().join("audit.jsonl.1").exists());
    }

    #[test]
    fn test_directory_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlAuditLogger::new(dir.path()).is_none());
    }
}
