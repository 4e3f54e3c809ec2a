//! Host console capabilities.
//!
//! The geometry provider and layout renderer never branch on the platform
//! themselves. They talk to a [`HostConsole`], picked once at program start:
//! [`CrosstermHost`] for a real terminal, [`MemoryHost`] for headless runs and
//! tests.

use std::cell::Cell;

use crossterm::{cursor, terminal, QueueableCommand};

use crate::error::HostError;
use crate::types::Region;

/// ANSI clear-screen followed by cursor-home.
pub const CLEAR_SEQUENCE: &[u8] = b"\x1b[2J\x1b[1;1H";

/// Query and clear primitives supplied by the operating environment.
pub trait HostConsole {
    /// Report the visible display region in inclusive cell coordinates.
    fn query_region(&self) -> Result<Region, HostError>;

    /// Queue whatever resets the visible grid and homes the cursor into `out`.
    ///
    /// Hosts that clear out-of-band may leave `out` untouched.
    fn clear(&self, out: &mut Vec<u8>) -> Result<(), HostError>;
}

impl<H: HostConsole + ?Sized> HostConsole for &H {
    fn query_region(&self) -> Result<Region, HostError> {
        (**self).query_region()
    }

    fn clear(&self, out: &mut Vec<u8>) -> Result<(), HostError> {
        (**self).clear(out)
    }
}

/// The process's real terminal, driven through crossterm.
#[derive(Debug, Clone, Copy)]
pub struct CrosstermHost {
    _handle: (),
}

impl CrosstermHost {
    /// Acquire the console capability.
    ///
    /// Fails with [`HostError::HandleUnavailable`] when standard output is not
    /// an open descriptor; neither query nor clear can work without it.
    pub fn acquire() -> Result<Self, HostError> {
        ensure_stdout_handle()?;
        Ok(Self { _handle: () })
    }
}

impl HostConsole for CrosstermHost {
    fn query_region(&self) -> Result<Region, HostError> {
        let (cols, rows) = terminal::size().map_err(|e| HostError::Query(e.to_string()))?;
        Ok(Region::from_extent(cols, rows))
    }

    fn clear(&self, out: &mut Vec<u8>) -> Result<(), HostError> {
        let clear_err = |e: std::io::Error| HostError::Clear(e.to_string());
        out.queue(terminal::Clear(terminal::ClearType::All))
            .map_err(clear_err)?;
        out.queue(cursor::MoveTo(0, 0)).map_err(clear_err)?;
        Ok(())
    }
}

#[cfg(unix)]
fn ensure_stdout_handle() -> Result<(), HostError> {
    use nix::fcntl::{fcntl, FcntlArg};

    let stdout = std::io::stdout();
    fcntl(&stdout, FcntlArg::F_GETFD)
        .map(|_| ())
        .map_err(|errno| HostError::HandleUnavailable(errno.to_string()))
}

#[cfg(not(unix))]
fn ensure_stdout_handle() -> Result<(), HostError> {
    Ok(())
}

/// In-memory host with a fixed geometry.
///
/// Clearing emits [`CLEAR_SEQUENCE`] and bumps a counter. Either primitive can
/// be scripted to fail.
#[derive(Debug)]
pub struct MemoryHost {
    region: Option<Region>,
    clear_fails: bool,
    clears: Cell<usize>,
}

impl MemoryHost {
    /// Host reporting a `cols` x `rows` display.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self::with_region(Region::from_extent(cols, rows))
    }

    pub fn with_region(region: Region) -> Self {
        Self {
            region: Some(region),
            clear_fails: false,
            clears: Cell::new(0),
        }
    }

    /// Host whose size query always fails.
    pub fn detached() -> Self {
        Self {
            region: None,
            clear_fails: false,
            clears: Cell::new(0),
        }
    }

    pub fn failing_clear(mut self) -> Self {
        self.clear_fails = true;
        self
    }

    /// Number of successful clears so far.
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }
}

impl HostConsole for MemoryHost {
    fn query_region(&self) -> Result<Region, HostError> {
        self.region
            .ok_or_else(|| HostError::Query("no display attached".to_string()))
    }

    fn clear(&self, out: &mut Vec<u8>) -> Result<(), HostError> {
        if self.clear_fails {
            return Err(HostError::Clear("clear rejected by host".to_string()));
        }
        out.extend_from_slice(CLEAR_SEQUENCE);
        self.clears.set(self.clears.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_host_reports_extent_as_inclusive_region() {
        let host = MemoryHost::new(100, 40);
        assert_eq!(host.query_region().unwrap(), Region::new(0, 0, 99, 39));
    }

    #[test]
    fn detached_memory_host_fails_query() {
        let err = MemoryHost::detached().query_region().unwrap_err();
        assert_eq!(err.operation(), "query");
    }

    #[test]
    fn memory_host_clear_emits_sequence_and_counts() {
        let host = MemoryHost::new(10, 4);
        let mut out = Vec::new();
        host.clear(&mut out).unwrap();
        host.clear(&mut out).unwrap();
        assert_eq!(host.clear_count(), 2);
        assert_eq!(out, [CLEAR_SEQUENCE, CLEAR_SEQUENCE].concat());
    }

    #[test]
    fn failing_clear_writes_nothing() {
        let host = MemoryHost::new(10, 4).failing_clear();
        let mut out = Vec::new();
        assert!(host.clear(&mut out).is_err());
        assert!(out.is_empty());
        assert_eq!(host.clear_count(), 0);
    }

    #[test]
    fn crossterm_clear_queues_clear_and_home() {
        let host = CrosstermHost { _handle: () };
        let mut out = Vec::new();
        host.clear(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[2J"));
        assert!(text.ends_with("\x1b[1;1H"));
    }

    #[cfg(unix)]
    #[test]
    fn acquire_checks_open_stdout_descriptor() {
        assert!(ensure_stdout_handle().is_ok());
        assert!(CrosstermHost::acquire().is_ok());
    }

    #[test]
    fn host_trait_is_usable_through_references() {
        fn region_of(host: impl HostConsole) -> Region {
            host.query_region().unwrap()
        }
        let host = MemoryHost::new(3, 2);
        assert_eq!(region_of(&host), Region::new(0, 0, 2, 1));
    }
}
