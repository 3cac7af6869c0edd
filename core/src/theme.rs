//! Color schemes and the active theme.
//!
//! A [`FlexTheme`] pairs a light and a dark [`ColorScheme`] with a reactive
//! dark-mode flag. Widgets resolve their base color through
//! [`FlexTheme::color`] every frame, so flipping the flag re-themes every
//! widget sharing the theme.

use alloc::rc::Rc;

use flex_ui_color::Color;
use nami::{Binding, Signal, binding, watcher::BoxWatcherGuard};

use crate::{Environment, config::FlexConfig, types::ColorType};

/// Role colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Primary brand color.
    pub primary: Color,
    /// Content drawn on `primary`.
    pub on_primary: Color,
    /// Secondary accent.
    pub secondary: Color,
    /// Tertiary accent.
    pub tertiary: Color,
    /// Error color.
    pub error: Color,
    /// Background of surfaces.
    pub surface: Color,
    /// Content drawn on `surface`.
    pub on_surface: Color,
    /// Primary color for inverted surfaces.
    pub inverse_primary: Color,
    /// Neutral outlines.
    pub outline: Color,
}

impl ColorScheme {
    /// Material 3 baseline light scheme.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_hex("#6750A4"),
            on_primary: Color::from_hex("#FFFFFF"),
            secondary: Color::from_hex("#625B71"),
            tertiary: Color::from_hex("#7D5260"),
            error: Color::from_hex("#B3261E"),
            surface: Color::from_hex("#FEF7FF"),
            on_surface: Color::from_hex("#1D1B20"),
            inverse_primary: Color::from_hex("#D0BCFF"),
            outline: Color::from_hex("#79747E"),
        }
    }

    /// Material 3 baseline dark scheme.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_hex("#D0BCFF"),
            on_primary: Color::from_hex("#381E72"),
            secondary: Color::from_hex("#CCC2DC"),
            tertiary: Color::from_hex("#EFB8C8"),
            error: Color::from_hex("#F2B8B5"),
            surface: Color::from_hex("#141218"),
            on_surface: Color::from_hex("#E6E0E9"),
            inverse_primary: Color::from_hex("#6750A4"),
            outline: Color::from_hex("#938F99"),
        }
    }

    /// Resolves a [`ColorType`] to a concrete color.
    #[must_use]
    pub const fn color(&self, color_type: ColorType) -> Color {
        match color_type {
            ColorType::Default => self.on_surface,
            ColorType::Primary => self.primary,
            ColorType::Secondary => self.secondary,
            ColorType::Tertiary => self.tertiary,
            ColorType::Error => self.error,
            ColorType::Inverse => self.inverse_primary,
        }
    }
}

/// A light/dark pair of schemes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSchemes {
    /// Scheme used in light mode.
    pub light: ColorScheme,
    /// Scheme used in dark mode.
    pub dark: ColorScheme,
}

impl ColorSchemes {
    /// Pairs two schemes.
    #[must_use]
    pub const fn new(light: ColorScheme, dark: ColorScheme) -> Self {
        Self { light, dark }
    }
}

impl Default for ColorSchemes {
    fn default() -> Self {
        Self::new(ColorScheme::light(), ColorScheme::dark())
    }
}

/// The active theme: color schemes plus the dark-mode flag.
#[derive(Debug, Clone)]
pub struct FlexTheme {
    dark: Binding<bool>,
    schemes: Rc<ColorSchemes>,
}

impl FlexTheme {
    /// Creates a theme with the default schemes.
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self::with_binding(&binding(dark))
    }

    /// Creates a theme whose dark mode follows an existing binding.
    #[must_use]
    pub fn with_binding(dark: &Binding<bool>) -> Self {
        Self {
            dark: dark.clone(),
            schemes: Rc::new(ColorSchemes::default()),
        }
    }

    /// Replaces the color schemes.
    #[must_use]
    pub fn schemes(mut self, schemes: ColorSchemes) -> Self {
        self.schemes = Rc::new(schemes);
        self
    }

    /// The dark-mode binding.
    #[must_use]
    pub const fn dark_binding(&self) -> &Binding<bool> {
        &self.dark
    }

    /// Whether the dark scheme is active.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// Switches between the light and dark scheme.
    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }

    /// Calls `handler` with the new flag whenever dark mode is switched.
    ///
    /// Hosts use this to schedule a frame; the handler stays registered for
    /// as long as the returned guard lives.
    pub fn on_dark_change(&self, handler: impl Fn(bool) + 'static) -> BoxWatcherGuard {
        self.dark.watch(move |context| handler(context.into_value()))
    }

    /// The scheme for the current mode.
    #[must_use]
    pub fn scheme(&self) -> &ColorScheme {
        if self.is_dark() {
            &self.schemes.dark
        } else {
            &self.schemes.light
        }
    }

    /// Resolves a [`ColorType`] against the current scheme.
    #[must_use]
    pub fn color(&self, color_type: ColorType) -> Color {
        self.scheme().color(color_type)
    }
}

impl Default for FlexTheme {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Retrieves the theme stored in the environment, or the light default.
#[must_use]
pub fn theme(env: &Environment) -> FlexTheme {
    env.get::<FlexTheme>().cloned().unwrap_or_default()
}

/// Retrieves the configuration stored in the environment, or the default.
#[must_use]
pub fn config(env: &Environment) -> Rc<FlexConfig> {
    env.get::<Rc<FlexConfig>>()
        .cloned()
        .unwrap_or_else(|| Rc::new(FlexConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_type_resolves_in_both_modes() {
        let schemes = ColorSchemes::default();
        for color_type in ColorType::ALL.iter().copied() {
            let light = schemes.light.color(color_type);
            let dark = schemes.dark.color(color_type);
            assert_ne!(light, dark, "{color_type} should differ between modes");
        }
    }

    #[test]
    fn dark_flag_switches_scheme() {
        let theme = FlexTheme::new(false);
        let shared = theme.clone();
        assert_eq!(theme.color(ColorType::Primary), ColorScheme::light().primary);

        shared.set_dark(true);
        assert!(theme.is_dark());
        assert_eq!(theme.color(ColorType::Primary), ColorScheme::dark().primary);
    }

    #[test]
    fn dark_change_notifies_while_guard_lives() {
        let theme = FlexTheme::default();
        let seen = Rc::new(core::cell::RefCell::new(Vec::new()));

        let guard = theme.on_dark_change({
            let seen = Rc::clone(&seen);
            move |dark| seen.borrow_mut().push(dark)
        });
        theme.set_dark(true);
        theme.set_dark(false);
        assert_eq!(&*seen.borrow(), &[true, false]);

        drop(guard);
        theme.set_dark(true);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn environment_lookup_falls_back_to_defaults() {
        let env = Environment::new();
        assert!(!theme(&env).is_dark());
        assert_eq!(*config(&env), FlexConfig::default());

        let env = env.with(FlexTheme::new(true));
        assert!(theme(&env).is_dark());
    }
}
