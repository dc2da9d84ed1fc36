//! Wrap a row of tags into a fixed-width panel and print where each one lands.
//!
//! Run with `RUST_LOG=trace` to see every placement.

use flowkit::{Align, Background, SizerChild, SizerConfig, Spacing, WrapSizer};

fn main() {
    env_logger::init();

    let tags = [
        ("rust", 48.0),
        ("layout", 64.0),
        ("wrap", 44.0),
        ("sizer", 52.0),
        ("padding", 72.0),
        ("alignment", 90.0),
        ("spacing", 70.0),
    ];

    let mut panel = WrapSizer::new(
        SizerConfig::default()
            .with_padding(Spacing::symmetric(12.0, 8.0))
            .with_item_spacing(6.0)
            .with_line_spacing(4.0),
    )
    .with_position(20.0, 20.0)
    .with_background(Background::new())
    .with_children(tags.iter().map(|&(name, width)| {
        SizerChild::element(width, 22.0)
            .with_id(name)
            .with_padding(Spacing::symmetric(2.0, 0.0))
            .with_align(Align::LeftCenter)
    }));

    if let Err(err) = panel.layout(Some(240.0), None) {
        eprintln!("layout failed: {err}");
        return;
    }

    println!(
        "panel at ({}, {}) size {}x{} in {} lines",
        panel.left(),
        panel.top(),
        panel.width(),
        panel.height(),
        panel.wrap_result().lines.len()
    );
    for child in panel.children() {
        let rect = child.rect();
        println!(
            "  {:<10} x={:>6.1} y={:>6.1} w={:>5.1}",
            child.id().map(|id| id.as_str()).unwrap_or("?"),
            rect.left(),
            rect.top(),
            rect.width()
        );
    }
}
