use crate::config::{DEFAULT_START_IDENTIFIER, DEFAULT_WINDOW_SIZE};
use crate::errors::{EngineError, EngineResult};
use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};

/// Position in the sequential identifier space (1, 2, 3, ...). The next
/// identifier only ever grows, one window per `advance`, until `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationCursor {
    next_identifier: u32,
    window_size: u32,
    start: u32,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            next_identifier: DEFAULT_START_IDENTIFIER,
            window_size: DEFAULT_WINDOW_SIZE,
            start: DEFAULT_START_IDENTIFIER,
        }
    }
}

impl PaginationCursor {
    pub fn new(start: u32, window_size: u32) -> EngineResult<Self> {
        if start == 0 {
            return Err(EngineError::config("pagination must start at identifier 1 or later"));
        }
        if window_size == 0 {
            return Err(EngineError::config("pagination window must hold at least one identifier"));
        }
        Ok(Self {
            next_identifier: start,
            window_size,
            start,
        })
    }

    pub fn next_identifier(&self) -> u32 {
        self.next_identifier
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// The identifiers of the next unfetched window. Does not move the cursor.
    pub fn next_window(&self) -> Vec<Identifier> {
        (0..self.window_size)
            .map_while(|offset| self.next_identifier.checked_add(offset))
            .map(Identifier::Id)
            .collect()
    }

    /// Move past the current window. Call once per aggregated window.
    pub fn advance(&mut self) {
        self.next_identifier = self.next_identifier.saturating_add(self.window_size);
    }

    /// Back to the first window, e.g. after the version filter changed.
    pub fn reset(&mut self) {
        self.next_identifier = self.start;
    }
}
