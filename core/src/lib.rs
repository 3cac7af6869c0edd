//! Core of `flex-ui`: design tokens, component configuration, theming,
//! interaction tracking and transitions.
//!
//! Widgets live in `flex-ui-controls`; this crate holds everything they share.

extern crate alloc;

#[macro_use]
mod macros;

pub mod animation;
pub mod config;
pub mod env;
pub mod interaction;
pub mod memo;
pub mod theme;
pub mod types;

#[doc(inline)]
pub use animation::{AnimationSpec, Easing, Transition};
#[doc(inline)]
pub use config::{ConfigError, FlexConfig, StyleConfig};
#[doc(inline)]
pub use env::Environment;
#[doc(inline)]
pub use interaction::{Interaction, InteractionSource, InteractionState, PointerEvent};
pub use memo::Memo;
#[doc(inline)]
pub use theme::{ColorScheme, FlexTheme};

pub use flex_ui_color as color;
pub use flex_ui_color::Color;
pub use nami;
