//! Ring buffer of notable simulator events.
//!
//! The newest entry is shown in the status line at the bottom of the screen.
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Plot 3 wrapped");
//! if let Some(line) = log.latest() {
//!     draw_status(line);
//! }
//! ```

use heapless::{Deque, String};

/// Number of entries kept.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per entry; longer messages are truncated.
pub const LOG_LINE_LENGTH: usize = 40;

pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    /// Total entries pushed, including dropped ones.
    pushed: u32,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            pushed: 0,
        }
    }

    /// Append a message, dropping the oldest one when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
        self.pushed = self.pushed.wrapping_add(1);
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    /// Entries, oldest first.
    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    #[allow(dead_code)]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Number of pushes since creation. Changes whenever a new entry arrives.
    #[inline]
    pub const fn pushed(&self) -> u32 { self.pushed }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_latest() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);

        log.push("System started");
        log.push("AA: ON");
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest(), Some("AA: ON"));
        assert_eq!(log.pushed(), 2);
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let mut log = DebugLog::new();
        for i in 0..=LOG_BUFFER_SIZE {
            let mut msg: String<8> = String::new();
            msg.push(char::from(b'a' + i as u8)).ok();
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("b"));
    }

    #[test]
    fn test_truncates_long_lines() {
        let mut log = DebugLog::new();
        let long = "x".repeat(LOG_LINE_LENGTH * 2);
        log.push(&long);
        assert_eq!(log.latest().map(str::len), Some(LOG_LINE_LENGTH));
    }
}
