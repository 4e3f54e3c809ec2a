//! Console frame demo (default binary).
//!
//! Samples the terminal size, draws a bordered information panel, waits for
//! Enter, then redraws a second frame composed from rules and centered lines.

mod telemetry;

use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::debug;

use console_frame::term::{BorderedLayout, CrosstermHost, GeometryProvider};
use console_frame::types::platform_name;

const INFO_LINES: i32 = 5;
const EXIT_DELAY: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    telemetry::init_tracing("warn");

    let host = CrosstermHost::acquire().context("failed to get console handle")?;
    let mut provider = GeometryProvider::new(host);
    let size = provider.query_current_size();
    debug!(width = size.width, height = size.height, "initial display size");
    let mut layout = BorderedLayout::new(size, host, io::stdout());

    info_panel(&mut layout)?;

    println!("\n\nPress Enter to see content within a dynamically drawn border...");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    layout.clear_screen()?;
    layout.set_size(provider.query_current_size());
    framed_panel(&mut layout)?;

    thread::sleep(EXIT_DELAY);
    Ok(())
}

fn info_panel(layout: &mut BorderedLayout<CrosstermHost, Stdout>) -> Result<()> {
    let size = layout.size();
    layout.clear_screen()?;
    layout.draw_border()?;

    layout.draw_centered_line("Console Information:", '#')?;
    layout.draw_centered_line(&format!("Width: {}", size.width), '#')?;
    layout.draw_centered_line(&format!("Height: {}", size.height), '#')?;
    layout.draw_centered_line(&format!("System: {}", platform_name()), '#')?;
    layout.draw_centered_line("", '#')?;

    let mut filler = i32::from(size.height) - 2 - INFO_LINES;
    if filler > 0 {
        layout.draw_centered_line("--- More Content Here ---", '#')?;
        filler -= 1;
    }
    for _ in 0..filler {
        layout.draw_centered_line("Filling space...", '#')?;
    }
    Ok(())
}

fn framed_panel(layout: &mut BorderedLayout<CrosstermHost, Stdout>) -> Result<()> {
    const BORDER: char = '=';
    let size = layout.size();

    layout.draw_repeated_char(BORDER, i32::from(size.width))?;
    layout.line_break()?;

    layout.draw_centered_line("Welcome to the Console Utility!", BORDER)?;
    layout.draw_centered_line("Resize this window to see changes!", BORDER)?;
    layout.draw_centered_line("", BORDER)?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    layout.draw_centered_line(&format!("Current Time: {now}"), BORDER)?;

    // Top rule plus the four lines above.
    let filler = i32::from(size.height) - 2 - 5;
    for i in 0..filler.max(0) {
        if i == filler / 2 {
            layout.draw_centered_line("Exiting in 5 seconds...", BORDER)?;
        } else {
            layout.draw_centered_line("", BORDER)?;
        }
    }

    layout.draw_repeated_char(BORDER, i32::from(size.width))?;
    layout.line_break()?;
    Ok(())
}
