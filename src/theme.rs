//! Theme management built on the environment pattern.
//!
//! A [`ThemeProvider`] bundles a [`FlexTheme`] with a [`FlexConfig`] and
//! installs both into an [`Environment`]. Every widget mounted with that
//! environment reads them back, and because the dark flag is a binding,
//! [`use_dark_theme`] re-themes all of them on their next frame.
//!
//! ```
//! use flex_ui::theme::{ThemeProvider, use_dark_theme};
//! use flex_ui::{FlexConfig, FlexTheme};
//!
//! let env = ThemeProvider::new(FlexTheme::default(), FlexConfig::default()).environment();
//! use_dark_theme(&env, true);
//! assert!(flex_ui::theme::theme(&env).is_dark());
//! ```

use alloc::rc::Rc;
use std::path::Path;

use flex_ui_core::{ConfigError, Environment, FlexConfig, FlexTheme};

#[doc(inline)]
pub use flex_ui_core::theme::{ColorScheme, ColorSchemes, config, theme};

/// Installs a theme and a configuration into an environment.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    theme: FlexTheme,
    config: Rc<FlexConfig>,
}

impl ThemeProvider {
    /// Creates a provider.
    #[must_use]
    pub fn new(theme: FlexTheme, config: FlexConfig) -> Self {
        Self {
            theme,
            config: Rc::new(config),
        }
    }

    /// Creates a provider whose configuration is read from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] raised while reading or validating the file.
    pub fn from_config_path(theme: FlexTheme, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(theme, FlexConfig::from_path(path)?))
    }

    /// The theme this provider installs.
    #[must_use]
    pub const fn theme(&self) -> &FlexTheme {
        &self.theme
    }

    /// The configuration this provider installs.
    #[must_use]
    pub fn config(&self) -> &FlexConfig {
        &self.config
    }

    /// Stores the theme and configuration in `env`, replacing earlier ones.
    pub fn install(self, env: &mut Environment) {
        tracing::debug!(target: "flex_ui::theme", dark = self.theme.is_dark(), "installing theme");
        env.insert(self.theme);
        env.insert(self.config);
    }

    /// A fresh environment holding only this theme and configuration.
    #[must_use]
    pub fn environment(self) -> Environment {
        let mut env = Environment::new();
        self.install(&mut env);
        env
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(FlexTheme::default(), FlexConfig::default())
    }
}

/// Switches the theme stored in `env` between light and dark.
///
/// Does nothing if `env` holds no theme.
pub fn use_dark_theme(env: &Environment, dark: bool) {
    if let Some(theme) = env.get::<FlexTheme>() {
        theme.set_dark(dark);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use flex_ui_core::types::{ButtonType, ComponentKind, SizeType};

    use super::*;
    use crate::button;

    #[test]
    fn install_makes_theme_and_config_visible() {
        let config = FlexConfig::from_toml_str("[button]\nsize_type = \"large\"").unwrap();
        let env = ThemeProvider::new(FlexTheme::new(true), config.clone()).environment();

        assert!(theme(&env).is_dark());
        assert_eq!(*super::config(&env), config);
    }

    #[test]
    fn widgets_follow_the_installed_config() {
        let config = FlexConfig::from_toml_str("[button]\nsize_type = \"small\"").unwrap();
        let env = ThemeProvider::new(FlexTheme::default(), config).environment();
        let mut instance = button("Ok").mount(&env);
        let small = flex_ui_core::config::resolve_style(ComponentKind::Button, SizeType::Small);

        let frame = instance.frame(Duration::from_millis(16));
        assert!((frame.height - small.height).abs() < f32::EPSILON);
    }

    #[test]
    fn dark_theme_switch_reaches_mounted_widgets() {
        let env = ThemeProvider::default().environment();
        let mut instance = button("Ok").button_type(ButtonType::Primary).mount(&env);
        assert_eq!(
            instance.frame(Duration::ZERO).background_color,
            ColorScheme::light().primary
        );

        use_dark_theme(&env, true);
        let frame = instance.frame(Duration::from_secs(1));
        assert_eq!(frame.background_color, ColorScheme::dark().primary);
    }

    #[test]
    fn missing_theme_is_ignored() {
        let env = Environment::new();
        use_dark_theme(&env, true);
        assert!(!theme(&env).is_dark());
    }
}
