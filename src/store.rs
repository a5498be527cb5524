//! Classification event log stores
//!
//! The engine emits classification events; it never persists them. These
//! collaborators take ownership of durability and replay: an in-memory store
//! for embedding and tests, and a file-backed store writing one
//! `timestamp | status | payload` line per event. `LogSummary` aggregates a
//! replayed event list into the counters a reporting view needs.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::detection::{ClassificationEvent, PayloadStatus};

/// A durable sink for classification events
pub trait LogStore {
    /// Append one event to the store
    fn append(&mut self, event: ClassificationEvent) -> Result<()>;

    /// Remove all recorded events
    fn clear(&mut self) -> Result<()>;
}

/// In-memory event store, replayable in insertion order
#[derive(Debug, Default)]
pub struct MemoryLogStore {
    events: Vec<ClassificationEvent>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in insertion order
    pub fn events(&self) -> &[ClassificationEvent] {
        &self.events
    }
}

impl LogStore for MemoryLogStore {
    fn append(&mut self, event: ClassificationEvent) -> Result<()> {
        self.events.push(event);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.events.clear();
        Ok(())
    }
}

/// File-backed event store.
///
/// Each event is one appended line: `{timestamp} | {status} | {payload}`.
/// Newlines inside the payload are collapsed to spaces so the line format
/// stays parseable.
#[derive(Debug)]
pub struct FileLogStore {
    path: PathBuf,
}

impl FileLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replay all events from the log file.
    ///
    /// A missing file is an empty store. Lines that do not parse are skipped
    /// with a debug log rather than failing the whole replay.
    pub fn load(&self) -> Result<Vec<ClassificationEvent>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("opening log file {}", self.path.display()))
            }
        };

        let mut events = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("reading {}", self.path.display()))?;
            match parse_line(&line) {
                Some(event) => events.push(event),
                None => {
                    if !line.trim().is_empty() {
                        debug!(line = %line, "skipping unparseable log line");
                    }
                }
            }
        }
        Ok(events)
    }
}

impl LogStore for FileLogStore {
    fn append(&mut self, event: ClassificationEvent) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening log file {}", self.path.display()))?;

        let payload = event.payload.replace(['\n', '\r'], " ");
        writeln!(
            file,
            "{} | {} | {}",
            event.timestamp.to_rfc3339(),
            event.status,
            payload
        )
        .with_context(|| format!("appending to {}", self.path.display()))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        File::create(&self.path)
            .with_context(|| format!("truncating log file {}", self.path.display()))?;
        Ok(())
    }
}

fn parse_line(line: &str) -> Option<ClassificationEvent> {
    let mut parts = line.splitn(3, " | ");
    let timestamp = DateTime::parse_from_rfc3339(parts.next()?)
        .ok()?
        .with_timezone(&Utc);
    let status: PayloadStatus = parts.next()?.parse().ok()?;
    let payload = parts.next()?.to_string();
    Some(ClassificationEvent {
        timestamp,
        payload,
        status,
    })
}

/// Aggregated view over a replayed event list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSummary {
    /// Number of events classified as attacks
    pub attack_count: usize,
    /// Number of events classified as safe
    pub safe_count: usize,
}

impl LogSummary {
    /// Count attack and safe events
    pub fn from_events(events: &[ClassificationEvent]) -> Self {
        let attack_count = events
            .iter()
            .filter(|e| e.status == PayloadStatus::Attack)
            .count();
        Self {
            attack_count,
            safe_count: events.len() - attack_count,
        }
    }
}

/// The `n` most frequent attack payloads with their occurrence counts,
/// most frequent first. Ties keep first-seen order.
pub fn top_attack_payloads(events: &[ClassificationEvent], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for event in events {
        if event.status != PayloadStatus::Attack {
            continue;
        }
        let count = counts.entry(event.payload.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(event.payload.as_str());
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = first_seen
        .into_iter()
        .map(|p| (p, counts[p]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(p, c)| (p.to_string(), c))
        .collect()
}
