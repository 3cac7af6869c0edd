//! `flex-ui` Controls
//! This crate provides the interactive widgets of `flex-ui`: buttons, radio
//! groups and switches. Each widget is a builder that mounts into a live
//! instance; the host feeds it pointer events and frame ticks and paints the
//! returned frame.
//!

extern crate alloc;

pub mod style;

pub mod button;
pub use button::{ButtonFrame, ButtonInstance, FlexButton, button, button_style};
pub mod radio;
pub use radio::{FlexRadio, RadioFrame, RadioInstance, RadioOption, options_from, radio, radio_colors};
pub mod switch;
pub use switch::{FlexSwitch, SwitchFrame, SwitchInstance, switch, switch_colors};
