//! Terminal geometry and bordered text layout.
//!
//! Two pieces, one feeding the other:
//!
//! - [`GeometryProvider`] samples the display size from a [`HostConsole`],
//!   falling back to 80x24 when the host cannot answer.
//! - [`BorderedLayout`] takes that snapshot and draws frames and centered
//!   lines into any `Write` sink.
//!
//! The host is chosen once by the caller and injected into both; nothing in
//! here holds process-wide state.
//!
//! # Example
//!
//! ```
//! use console_frame_term::{BorderedLayout, GeometryProvider, MemoryHost};
//!
//! let host = MemoryHost::new(10, 4);
//! let mut provider = GeometryProvider::new(&host);
//! let size = provider.query_current_size();
//!
//! let mut layout = BorderedLayout::new(size, &host, Vec::new());
//! layout.draw_full_border('X').unwrap();
//! assert_eq!(
//!     String::from_utf8(layout.into_inner()).unwrap(),
//!     "XXXXXXXXXX\nX        X\nX        X\nXXXXXXXXXX\n"
//! );
//! ```

pub mod error;
pub mod geometry;
pub mod host;
pub mod renderer;

pub use console_frame_types as types;

pub use error::HostError;
pub use geometry::GeometryProvider;
pub use host::{CrosstermHost, HostConsole, MemoryHost, CLEAR_SEQUENCE};
pub use renderer::{encode_border_into, encode_centered_into, encode_repeated_into, BorderedLayout};
