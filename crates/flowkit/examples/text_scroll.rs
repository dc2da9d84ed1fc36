//! Scroll a long text block and print the edge events it raises.
//!
//! Run with `RUST_LOG=debug` to see offset changes.

use flowkit::{TextBlock, TextStyle, TextViewport};

fn main() {
    env_logger::init();

    let style = TextStyle::default().with_font_size(18.0).with_line_spacing(2.0);
    let mut block = TextBlock::new(TextViewport::new(style, 100.0))
        .on_edge_exceeded(|event| println!("  edge event: {event:?}"));

    let text = (1..=12)
        .map(|i| format!("Line number {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    block.set_text(text);

    println!(
        "{} lines, {} visible, scroll range [{}, {}]",
        block.total_lines_count(),
        block.visible_lines_count(),
        block.bottom_text_oy(),
        block.top_text_oy()
    );

    for request in [-40.0, -500.0, -600.0, -60.0, 30.0] {
        block.set_text_oy(request);
        println!(
            "requested {request:>7.1} -> offset {:>7.1} ({:.0}%), lines {:?}",
            block.text_oy(),
            block.text_oy_percentage() * 100.0,
            block.visible_line_range()
        );
    }

    block.set_text_oy_by_percentage(0.5);
    println!("halfway -> offset {}", block.text_oy());
}
