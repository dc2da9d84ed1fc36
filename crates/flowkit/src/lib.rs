//! # flowkit
//!
//! Backend agnostic layout and scrolling logic for widget toolkits.
//!
//! This crate computes geometry and scroll state only. Rendering, text shaping
//! and input handling belong to whichever backend consumes the results.
//!
//! ## Wrap layout
//!
//! - [`WrapSizer`] - Container that flows its children into wrapped lines
//! - [`SizerChild`] / [`ChildConfig`] - Children with per-child padding and alignment
//! - [`WrapProvider`] - Trait for line breaking, with [`GreedyWrap`] as the default
//! - [`AlignZone`] / [`align_in`] - Anchor-based placement inside a zone
//!
//! ## Scrollable text
//!
//! - [`TextBlock`] - Clamped vertical offset over a line buffer with edge events
//! - [`TextLines`] - Plain or pen-segmented line buffer
//! - [`TextObject`] - Trait for the rendering object being scrolled
//! - [`EdgeEvent`] - Raised when a scroll request moves past a bound

mod align;
mod error;
mod events;
mod layout;
mod primitives;
mod sizer;
mod text_block;
mod text_lines;
mod wrap;

pub use align::*;
pub use error::*;
pub use events::*;
pub use layout::*;
pub use primitives::*;
pub use sizer::*;
pub use text_block::*;
pub use text_lines::*;
pub use wrap::*;

pub use flowkit_macros::WithBuilders;
