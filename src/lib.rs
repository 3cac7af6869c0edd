#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod log;
pub mod theme;

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! # Example
    //!
    //! ```rust
    //! use flex_ui::prelude::*;
    //!
    //! let env = ThemeProvider::default().environment();
    //! let button = button("Save").button_type(ButtonType::Primary).mount(&env);
    //! assert!(button.is_enabled());
    //! ```
    pub use super::theme::{ThemeProvider, use_dark_theme};
    pub use super::{
        AnimationSpec, Color, ColorScheme, Easing, Environment, FlexConfig, FlexTheme,
        PointerEvent, Transition,
    };
    pub use super::types::*;
    pub use flex_ui_controls::{
        FlexButton, FlexRadio, FlexSwitch, RadioOption, button, options_from, radio, switch,
    };
    pub use nami::{Binding, Signal, binding};
}

pub use flex_ui_color as color;
pub use flex_ui_controls as controls;
pub use flex_ui_controls::{button, radio, switch};
pub use nami as reactive;

#[doc(inline)]
pub use flex_ui_core::{
    AnimationSpec, Color, ColorScheme, ConfigError, Easing, Environment, FlexConfig, FlexTheme,
    Interaction, InteractionState, PointerEvent, StyleConfig, Transition, animation, config, env,
    interaction, types,
};
