//! Component configuration: per-size style records and per-component defaults.
//!
//! [`FlexConfig`] is built once per context and shared read-only by every
//! widget beneath it. Resolution is a total function of
//! ([`ComponentKind`], [`SizeType`]):
//!
//! ```
//! use flex_ui_core::config::resolve_style;
//! use flex_ui_core::types::{ComponentKind, SizeType};
//!
//! let small = resolve_style(ComponentKind::Button, SizeType::Small);
//! let medium = resolve_style(ComponentKind::Button, SizeType::Medium);
//! assert!(small.height < medium.height);
//! ```
//!
//! Defaults can be adjusted from TOML, see [`ConfigOverrides`].

mod overrides;
mod table;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use overrides::{ComponentOverrides, ConfigOverrides, SizeOverrides, StyleOverrides};

use crate::types::{
    ButtonType, ColorType, ComponentKind, CornerType, FontWeight, RadioSwitchType, RadioType,
    SizeType, SwitchType,
};

/// Errors raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML or has an unexpected shape.
    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Concrete style record for one component kind at one size.
///
/// All lengths are in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Component height.
    pub height: f32,
    /// Padding on each side of the content.
    pub horizontal_padding: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Icon (or ring / thumb) size.
    pub icon_size: f32,
    /// Gap between the icon and the text.
    pub icon_interval: f32,
    /// Text size.
    pub font_size: f32,
    /// Text weight.
    pub font_weight: FontWeight,
    /// Letter spacing; `None` leaves it to the text renderer.
    pub letter_spacing: Option<f32>,
}

impl StyleConfig {
    fn validate(&self, path: &str) -> Result<(), ConfigError> {
        let lengths = [
            ("height", self.height),
            ("horizontal_padding", self.horizontal_padding),
            ("border_width", self.border_width),
            ("icon_size", self.icon_size),
            ("icon_interval", self.icon_interval),
            ("font_size", self.font_size),
        ];
        for (name, value) in lengths {
            if !value.is_finite() {
                return Err(invalid(path, name, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(invalid(path, name, "must not be negative"));
            }
        }
        if self.height <= 0.0 {
            return Err(invalid(path, "height", "must be positive"));
        }
        if self.font_size <= 0.0 {
            return Err(invalid(path, "font_size", "must be positive"));
        }
        if self.letter_spacing.is_some_and(|spacing| !spacing.is_finite()) {
            return Err(invalid(path, "letter_spacing", "must be a finite number"));
        }
        if !(1..=1000).contains(&self.font_weight.0) {
            return Err(invalid(path, "font_weight", "must be between 1 and 1000"));
        }
        Ok(())
    }
}

fn invalid(path: &str, name: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        field: format!("{path}.{name}"),
        reason,
    }
}

/// One [`StyleConfig`] per [`SizeType`].
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTable([StyleConfig; SizeType::COUNT]);

impl SizeTable {
    /// Creates a table from records ordered like [`SizeType::ALL`].
    #[must_use]
    pub const fn new(styles: [StyleConfig; SizeType::COUNT]) -> Self {
        Self(styles)
    }

    /// Built-in table for a component kind.
    #[must_use]
    pub fn builtin(kind: ComponentKind) -> &'static Self {
        match kind {
            ComponentKind::Button => &table::BUTTON,
            ComponentKind::Radio => &table::RADIO,
            ComponentKind::Switch => &table::SWITCH,
        }
    }

    /// The record for `size`.
    #[must_use]
    pub const fn get(&self, size: SizeType) -> &StyleConfig {
        &self.0[size.index()]
    }

    /// Mutable access to the record for `size`.
    pub const fn get_mut(&mut self, size: SizeType) -> &mut StyleConfig {
        &mut self.0[size.index()]
    }

    /// Iterates `(size, record)` pairs from smallest to largest.
    pub fn iter(&self) -> impl Iterator<Item = (SizeType, &StyleConfig)> {
        SizeType::ALL.iter().copied().zip(self.0.iter())
    }
}

/// Defaults and size table for one component family.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentConfig {
    /// Size used when a widget does not choose one.
    pub size_type: SizeType,
    /// Color used when a widget does not choose one.
    pub color_type: ColorType,
    /// Corner used when a widget does not choose one.
    pub corner_type: CornerType,
    /// Per-size style records.
    pub sizes: SizeTable,
}

impl ComponentConfig {
    /// Built-in configuration for a component kind.
    #[must_use]
    pub fn builtin(kind: ComponentKind) -> Self {
        Self {
            size_type: SizeType::Medium,
            color_type: ColorType::Primary,
            corner_type: match kind {
                ComponentKind::Switch => CornerType::Circle,
                ComponentKind::Button | ComponentKind::Radio => CornerType::Medium,
            },
            sizes: SizeTable::builtin(kind).clone(),
        }
    }

    /// The style record for `size`.
    #[must_use]
    pub const fn get_config(&self, size: SizeType) -> &StyleConfig {
        self.sizes.get(size)
    }
}

/// Configuration shared by every widget under one theme context.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexConfig {
    /// Button family.
    pub button: ComponentConfig,
    /// Radio family.
    pub radio: ComponentConfig,
    /// Switch family.
    pub switch: ComponentConfig,
    /// Variant used when a button does not choose one.
    pub button_type: ButtonType,
    /// Variant used when a radio group does not choose one.
    pub radio_type: RadioType,
    /// Selection motion used when a radio group does not choose one.
    pub radio_switch_type: RadioSwitchType,
    /// Variant used when a switch does not choose one.
    pub switch_type: SwitchType,
}

impl Default for FlexConfig {
    fn default() -> Self {
        Self {
            button: ComponentConfig::builtin(ComponentKind::Button),
            radio: ComponentConfig::builtin(ComponentKind::Radio),
            switch: ComponentConfig::builtin(ComponentKind::Switch),
            button_type: ButtonType::default(),
            radio_type: RadioType::default(),
            radio_switch_type: RadioSwitchType::default(),
            switch_type: SwitchType::default(),
        }
    }
}

impl FlexConfig {
    /// The configuration of one component family.
    #[must_use]
    pub const fn component(&self, kind: ComponentKind) -> &ComponentConfig {
        match kind {
            ComponentKind::Button => &self.button,
            ComponentKind::Radio => &self.radio,
            ComponentKind::Switch => &self.switch,
        }
    }

    const fn component_mut(&mut self, kind: ComponentKind) -> &mut ComponentConfig {
        match kind {
            ComponentKind::Button => &mut self.button,
            ComponentKind::Radio => &mut self.radio,
            ComponentKind::Switch => &mut self.switch,
        }
    }

    /// Resolves the style record for a component kind and size.
    #[must_use]
    pub const fn resolve_style(&self, kind: ComponentKind, size: SizeType) -> StyleConfig {
        *self.component(kind).get_config(size)
    }

    /// Applies overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a resulting style record has a
    /// negative, non-finite or zero-height dimension. `self` is consumed either way.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        for kind in ComponentKind::ALL.iter().copied() {
            if let Some(component) = overrides.component(kind) {
                component.apply(self.component_mut(kind));
            }
        }
        if let Some(button_type) = overrides.button_type {
            self.button_type = button_type;
        }
        if let Some(radio_type) = overrides.radio_type {
            self.radio_type = radio_type;
        }
        if let Some(radio_switch_type) = overrides.radio_switch_type {
            self.radio_switch_type = radio_switch_type;
        }
        if let Some(switch_type) = overrides.switch_type {
            self.switch_type = switch_type;
        }
        self.validate()?;
        Ok(self)
    }

    /// Parses [`ConfigOverrides`] from TOML and applies them to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = toml::from_str(source)?;
        let config = Self::default().with_overrides(&overrides)?;
        tracing::debug!(target: "flex_ui::config", "loaded configuration overrides");
        Ok(config)
    }

    /// Reads a TOML file and applies it to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`FlexConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(target: "flex_ui::config", path = %path.display(), "reading configuration");
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in ComponentKind::ALL.iter().copied() {
            for (size, style) in self.component(kind).sizes.iter() {
                let path = format!("{}.sizes.{}", snake(kind.name()), snake(size.name()));
                style.validate(&path)?;
            }
        }
        Ok(())
    }
}

fn snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Resolves a style record from the built-in tables.
///
/// Total over the declared enumerations; the same inputs always yield the
/// same record.
#[must_use]
pub fn resolve_style(kind: ComponentKind, size: SizeType) -> StyleConfig {
    *SizeTable::builtin(kind).get(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_total_and_deterministic() {
        let config = FlexConfig::default();
        for kind in ComponentKind::ALL.iter().copied() {
            for size in SizeType::ALL.iter().copied() {
                let first = resolve_style(kind, size);
                assert_eq!(first, resolve_style(kind, size));
                assert_eq!(first, config.resolve_style(kind, size));
            }
        }
    }

    #[test]
    fn builtin_tables_grow_with_size() {
        for kind in ComponentKind::ALL.iter().copied() {
            let styles: Vec<StyleConfig> = SizeType::ALL
                .iter()
                .map(|size| resolve_style(kind, *size))
                .collect();
            for pair in styles.windows(2) {
                assert!(pair[0].height < pair[1].height, "{kind} height");
                assert!(pair[0].font_size < pair[1].font_size, "{kind} font size");
                assert!(pair[0].icon_size < pair[1].icon_size, "{kind} icon size");
            }
        }
    }

    #[test]
    fn small_is_smaller_than_medium() {
        for kind in ComponentKind::ALL.iter().copied() {
            let small = resolve_style(kind, SizeType::Small);
            let medium = resolve_style(kind, SizeType::Medium);
            assert!(small.height < medium.height);
            assert!(small.font_size < medium.font_size);
            assert!(small.icon_size < medium.icon_size);
        }
    }

    #[test]
    fn builtin_tables_validate() {
        FlexConfig::default().validate().unwrap();
    }

    #[test]
    fn switch_thumb_fits_track() {
        for (_, style) in SizeTable::builtin(ComponentKind::Switch).iter() {
            assert!(style.icon_size + 2.0 * style.horizontal_padding <= style.height);
        }
    }

    #[test]
    fn overrides_only_touch_named_fields() {
        let config = FlexConfig::from_toml_str(
            r#"
            button_type = "filled"

            [button]
            size_type = "small"

            [button.sizes.medium]
            height = 34.0
            letter_spacing = 0.5
            "#,
        )
        .unwrap();

        let defaults = FlexConfig::default();
        assert_eq!(config.button_type, ButtonType::Filled);
        assert_eq!(config.button.size_type, SizeType::Small);
        assert_eq!(config.button.color_type, defaults.button.color_type);

        let medium = config.resolve_style(ComponentKind::Button, SizeType::Medium);
        let default_medium = defaults.resolve_style(ComponentKind::Button, SizeType::Medium);
        assert!((medium.height - 34.0).abs() < f32::EPSILON);
        assert_eq!(medium.letter_spacing, Some(0.5));
        assert!((medium.font_size - default_medium.font_size).abs() < f32::EPSILON);

        assert_eq!(config.radio, defaults.radio);
        assert_eq!(config.switch, defaults.switch);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = FlexConfig::from_toml_str(
            r#"
            [switch.sizes.large]
            height = -1.0
            "#,
        )
        .unwrap_err();

        match error {
            ConfigError::InvalidValue { field, .. } => {
                assert_eq!(field, "switch.sizes.large.height");
            }
            other => panic!("unexpected error: {other}"),
        }

        let zero = FlexConfig::from_toml_str("[radio.sizes.small]\nheight = 0.0").unwrap_err();
        assert!(matches!(zero, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let error = FlexConfig::from_toml_str("[button\nsize_type = 1").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));

        let unknown = FlexConfig::from_toml_str("[button]\nsize_type = \"huge\"").unwrap_err();
        assert!(matches!(unknown, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = FlexConfig::from_path("/definitely/not/here/flex.toml").unwrap_err();
        assert!(matches!(error, ConfigError::Io(_)));
    }

    #[test]
    fn snake_case_paths() {
        assert_eq!(snake("ExtraSmall"), "extra_small");
        assert_eq!(snake("Button"), "button");
    }
}
