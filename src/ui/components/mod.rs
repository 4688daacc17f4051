//! Reusable markup components.
//!
//! Each component is an askama template; section templates embed them with
//! the `safe` filter once they are built.
//!
//! # Components
//!
//! - [`Button`], [`LinkButton`]: Call-to-action buttons with variants
//! - [`TextInput`], [`TextArea`]: Form fields
//! - [`SectionHeading`]: Gradient title with subtitle
//! - [`StatFigure`]: Headline figure with label
//!
//! SVG icons and decorative shapes live in `templates/icons/`.

pub mod button;
pub mod input;
pub mod section_heading;
pub mod stat;

pub use button::{Button, ButtonSize, ButtonVariant, LinkButton};
pub use input::{TextArea, TextInput};
pub use section_heading::SectionHeading;
pub use stat::{StatFigure, StatSize};
