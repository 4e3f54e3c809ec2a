use console_frame::term::{BorderedLayout, GeometryProvider, MemoryHost, CLEAR_SEQUENCE};
use console_frame::types::{DisplaySize, Region};

#[test]
fn failed_query_returns_80x24() {
    let mut provider = GeometryProvider::new(MemoryHost::detached());
    let size = provider.query_current_size();
    assert_eq!(size, DisplaySize { width: 80, height: 24 });
    assert_eq!(provider.last_size(), Some(size));
}

#[test]
fn inverted_region_height_is_replaced() {
    let host = MemoryHost::with_region(Region::new(0, 10, 99, 3));
    let mut provider = GeometryProvider::new(host);
    assert_eq!(provider.query_current_size(), DisplaySize::new(100, 24));
}

#[test]
fn requery_picks_up_new_host_geometry() {
    let small = MemoryHost::new(20, 5);
    let large = MemoryHost::new(60, 15);

    let mut provider = GeometryProvider::new(&small);
    let mut layout = BorderedLayout::new(provider.query_current_size(), &small, Vec::new());
    layout.draw_centered_line("", '#').unwrap();

    let mut provider = GeometryProvider::new(&large);
    layout.set_size(provider.query_current_size());
    layout.draw_centered_line("", '#').unwrap();

    let out = String::from_utf8(layout.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0].len(), 20);
    assert_eq!(lines[1].len(), 60);
}

#[test]
fn clear_then_border_renders_one_frame() {
    let host = MemoryHost::new(4, 3);
    let size = GeometryProvider::new(&host).query_current_size();
    let mut layout = BorderedLayout::new(size, &host, Vec::new());
    layout.clear_screen().unwrap();
    layout.draw_border().unwrap();

    let mut expected = CLEAR_SEQUENCE.to_vec();
    expected.extend_from_slice(b"XXXX\nX  X\nXXXX\n");
    assert_eq!(layout.into_inner(), expected);
    assert_eq!(host.clear_count(), 1);
}

#[test]
fn clear_failure_does_not_interrupt_drawing() {
    let host = MemoryHost::new(4, 2).failing_clear();
    let mut layout = BorderedLayout::new(DisplaySize::new(4, 2), &host, Vec::new());
    layout.clear_screen().unwrap();
    layout.draw_border().unwrap();
    assert_eq!(layout.into_inner(), b"XXXX\nXXXX\n");
}
