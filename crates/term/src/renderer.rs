//! BorderedLayout: draws framed, centered text against a captured size.
//!
//! Every drawing call is encoded into an internal byte buffer first and then
//! flushed to the sink in one write, so a frame is never interleaved with a
//! partial line. The `encode_*_into` functions hold the layout arithmetic and
//! are pure; they can be tested without any sink at all.

use std::io::{self, Write};

use tracing::warn;

use crate::host::HostConsole;
use crate::types::{DisplaySize, DEFAULT_BORDER_CHAR};

pub struct BorderedLayout<H, W: Write> {
    size: DisplaySize,
    host: H,
    out: W,
    buf: Vec<u8>,
}

impl<H: HostConsole, W: Write> BorderedLayout<H, W> {
    pub fn new(size: DisplaySize, host: H, out: W) -> Self {
        Self {
            size,
            host,
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// The geometry snapshot all layout arithmetic uses.
    pub fn size(&self) -> DisplaySize {
        self.size
    }

    /// Replace the captured snapshot, e.g. after re-querying the provider.
    pub fn set_size(&mut self, size: DisplaySize) {
        self.size = size;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the screen and home the cursor.
    ///
    /// A host that fails to clear leaves the display as it was; the failure is
    /// logged, not returned. Only sink write errors propagate.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.buf.clear();
        if let Err(err) = self.host.clear(&mut self.buf) {
            warn!(
                operation = err.operation(),
                reason = err.reason(),
                "could not clear screen, leaving display unchanged"
            );
            self.buf.clear();
            return Ok(());
        }
        self.flush_buf()
    }

    /// Emit `ch` `count` times with no line break. `count <= 0` emits nothing.
    pub fn draw_repeated_char(&mut self, ch: char, count: i32) -> io::Result<()> {
        self.buf.clear();
        encode_repeated_into(ch, i64::from(count), &mut self.buf);
        self.flush_buf()
    }

    pub fn line_break(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.push(b'\n');
        self.flush_buf()
    }

    /// Draw a full-screen frame of `border`.
    pub fn draw_full_border(&mut self, border: char) -> io::Result<()> {
        self.buf.clear();
        encode_border_into(self.size, border, &mut self.buf);
        self.flush_buf()
    }

    /// [`draw_full_border`](Self::draw_full_border) with the default `'X'`.
    pub fn draw_border(&mut self) -> io::Result<()> {
        self.draw_full_border(DEFAULT_BORDER_CHAR)
    }

    /// Draw `text` horizontally centered between two `border` characters.
    pub fn draw_centered_line(&mut self, text: &str, border: char) -> io::Result<()> {
        self.buf.clear();
        encode_centered_into(self.size, text, border, &mut self.buf);
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

/// Encode `ch` repeated `count` times into `out`.
pub fn encode_repeated_into(ch: char, count: i64, out: &mut Vec<u8>) {
    if count <= 0 {
        return;
    }
    let mut utf8 = [0u8; 4];
    let bytes = ch.encode_utf8(&mut utf8).as_bytes();
    for _ in 0..count {
        out.extend_from_slice(bytes);
    }
}

/// Encode a full frame: top rule, `height - 2` side-bordered rows, bottom rule.
///
/// Heights below 2 produce the two rules and no interior rows.
pub fn encode_border_into(size: DisplaySize, border: char, out: &mut Vec<u8>) {
    let width = i64::from(size.width);
    let height = i64::from(size.height);

    encode_repeated_into(border, width, out);
    out.push(b'\n');

    for _ in 0..(height - 2).max(0) {
        push_char(border, out);
        encode_repeated_into(' ', width - 2, out);
        push_char(border, out);
        out.push(b'\n');
    }

    encode_repeated_into(border, width, out);
    out.push(b'\n');
}

/// Encode one centered, bordered line.
///
/// Below width 2 there is no room for the border and `text` is emitted bare.
/// Otherwise the left padding is `(content - len) / 2` truncated toward zero
/// and the right side takes the remainder. Text wider than the content area
/// is never cut; the negative padding emits no spaces and the line overflows.
pub fn encode_centered_into(size: DisplaySize, text: &str, border: char, out: &mut Vec<u8>) {
    let width = i64::from(size.width);
    if width < 2 {
        out.extend_from_slice(text.as_bytes());
        out.push(b'\n');
        return;
    }

    let content = (width - 2).max(0);
    let len = text.chars().count() as i64;
    let padding = (content - len) / 2;
    let remaining = content - padding - len;

    push_char(border, out);
    encode_repeated_into(' ', padding, out);
    out.extend_from_slice(text.as_bytes());
    encode_repeated_into(' ', remaining, out);
    push_char(border, out);
    out.push(b'\n');
}

fn push_char(ch: char, out: &mut Vec<u8>) {
    encode_repeated_into(ch, 1, out);
}
