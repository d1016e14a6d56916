use std::fmt;

/// Identity of a log entry, assigned once by the owning [`ConsoleLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    id: EntryId,
    text: String,
}

impl LogEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only collection of log entries owned by whoever feeds the panel.
///
/// Ids grow with every push and are never handed out twice, so trimming the
/// front or clearing keeps the keys of the remaining entries stable.
#[derive(Debug)]
pub struct ConsoleLog {
    entries: Vec<LogEntry>,
    max_entries: usize,
    next_id: u64,
}

impl ConsoleLog {
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: Vec::with_capacity(max_entries.min(1024)),
            max_entries,
            next_id: 0,
        }
    }

    pub fn push(&mut self, text: impl Into<String>) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(LogEntry {
            id,
            text: text.into(),
        });

        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(0..excess);
            log::trace!("Dropped {} oldest entries", excess);
        }
        id
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        log::debug!("Clearing {} entries", self.entries.len());
        self.entries.clear();
    }

    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries.max(1);
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(0..excess);
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
