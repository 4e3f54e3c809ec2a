//! Shared types and constants - display geometry with no I/O
//!
//! This crate defines the value types passed between the geometry provider and
//! the layout renderer. Nothing here touches the terminal, so everything is
//! usable from tests, benches and headless hosts alike.
//!
//! # Fallback Geometry
//!
//! When the host cannot report its size, or reports a non-positive dimension,
//! the affected dimension falls back to a fixed default:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 80 | Columns used when the width is unknown |
//! | `DEFAULT_HEIGHT` | 24 | Rows used when the height is unknown |
//!
//! # Examples
//!
//! ```
//! use console_frame_types::{DisplaySize, Region, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! // Inclusive region coordinates, as reported by window-style consoles
//! let size = DisplaySize::from_region(Region::new(0, 0, 119, 29));
//! assert_eq!(size, DisplaySize::new(120, 30));
//!
//! // Non-positive dimensions are replaced by the defaults
//! let size = DisplaySize::sanitized(0, -3);
//! assert_eq!(size, DisplaySize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
//! ```

/// Fallback display width in columns (80)
pub const DEFAULT_WIDTH: u16 = 80;

/// Fallback display height in rows (24)
pub const DEFAULT_HEIGHT: u16 = 24;

/// Border character used when the caller does not pick one.
pub const DEFAULT_BORDER_CHAR: char = 'X';

/// Visible extent of the display in character cells.
///
/// A `DisplaySize` is a snapshot: once handed to a renderer it is never
/// re-queried or re-validated. Sizes produced by the geometry provider always
/// have both dimensions greater than zero; sizes built with [`DisplaySize::new`]
/// are taken as-is, which lets callers exercise degenerate layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplaySize {
    pub width: u16,
    pub height: u16,
}

impl DisplaySize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// The 80x24 fallback size.
    pub const fn fallback() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Build a size from raw (possibly bogus) dimensions.
    ///
    /// Each dimension `<= 0` is replaced by its default independently.
    /// Values beyond `u16::MAX` saturate.
    pub fn sanitized(width: i64, height: i64) -> Self {
        Self {
            width: clamp_dimension(width, DEFAULT_WIDTH),
            height: clamp_dimension(height, DEFAULT_HEIGHT),
        }
    }

    /// Convert an inclusive start/end region into cell counts.
    pub fn from_region(region: Region) -> Self {
        Self::sanitized(region.width(), region.height())
    }
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self::fallback()
    }
}

fn clamp_dimension(value: i64, default: u16) -> u16 {
    if value <= 0 {
        default
    } else {
        u16::try_from(value).unwrap_or(u16::MAX)
    }
}

/// Rectangular display region in inclusive cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Region covering `cols` x `rows` cells anchored at the origin.
    pub fn from_extent(cols: u16, rows: u16) -> Self {
        Self::new(0, 0, i32::from(cols) - 1, i32::from(rows) - 1)
    }

    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left) + 1
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top) + 1
    }
}

/// Human-readable name of the platform this binary was built for.
pub fn platform_name() -> &'static str {
    if cfg!(all(target_os = "windows", target_pointer_width = "64")) {
        "Windows 64-bit"
    } else if cfg!(target_os = "windows") {
        "Windows 32-bit"
    } else if cfg!(target_os = "macos") {
        "macOS (Apple/Darwin)"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else if cfg!(target_os = "freebsd") {
        "FreeBSD"
    } else if cfg!(target_os = "netbsd") {
        "NetBSD"
    } else if cfg!(target_os = "openbsd") {
        "OpenBSD"
    } else if cfg!(any(target_os = "solaris", target_os = "illumos")) {
        "Solaris (SunOS)"
    } else {
        "Unknown Unix-like Platform"
    }
}
