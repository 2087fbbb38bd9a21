//! Named collections layered onto the rendered editor surface.
//!
//! Decoration collections are engine-owned and do not survive an
//! active-document switch; style collections are switch-independent but
//! live for the engine's lifetime unless deleted. Each overlay manager is
//! the sole mutator of its own collections.

mod decorations;
mod styles;

pub use decorations::DecorationOverlay;
pub use styles::StyleOverlay;
