//! Terminal user interface rendering.
//!
//! Transforms selector state into ANSI-styled frames through small
//! composable components. Rendering never touches the terminal itself; the
//! binary writes the returned frame to stderr.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame (String)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Frame assembly
//! - [`components`]: Header, list, delete prompt, empty state and footer
//! - [`helpers`]: Cursor positioning and match highlighting
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{CreateRowInfo, DeletePromptInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
