//! # View Layer
//!
//! Rendering is a pure function of the data handed in. The renderer keeps no
//! business state: only the surface it draws on and the fixed element table
//! ([`Element`]).
//!
//! - [`surface`]: the [`RenderSurface`] contract and the element table.
//! - [`document`]: [`Document`], a retained in-memory surface. Tests inspect
//!   it, the CLI paints it.
//! - [`renderer`]: [`ViewRenderer`], the operations the controller calls.

pub mod document;
pub mod renderer;
pub mod surface;

pub use document::Document;
pub use renderer::ViewRenderer;
pub use surface::{Element, RenderSurface, RowNode};
