//! Partial configuration read from TOML.
//!
//! Every field is optional; only the fields present in the document replace
//! the corresponding defaults.
//!
//! ```toml
//! button_type = "filled"
//!
//! [button]
//! size_type = "small"
//! corner_type = "circle"
//!
//! [button.sizes.medium]
//! height = 34.0
//! font_weight = 600
//! ```

use serde::{Deserialize, Serialize};

use super::{ComponentConfig, StyleConfig};
use crate::types::{
    ButtonType, ColorType, ComponentKind, CornerType, FontWeight, RadioSwitchType, RadioType,
    SizeType, SwitchType,
};

/// Top-level overrides document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Button family overrides.
    pub button: Option<ComponentOverrides>,
    /// Radio family overrides.
    pub radio: Option<ComponentOverrides>,
    /// Switch family overrides.
    pub switch: Option<ComponentOverrides>,
    /// Default button variant.
    pub button_type: Option<ButtonType>,
    /// Default radio variant.
    pub radio_type: Option<RadioType>,
    /// Default radio selection motion.
    pub radio_switch_type: Option<RadioSwitchType>,
    /// Default switch variant.
    pub switch_type: Option<SwitchType>,
}

impl ConfigOverrides {
    /// Overrides for one component family, if any.
    #[must_use]
    pub const fn component(&self, kind: ComponentKind) -> Option<&ComponentOverrides> {
        match kind {
            ComponentKind::Button => self.button.as_ref(),
            ComponentKind::Radio => self.radio.as_ref(),
            ComponentKind::Switch => self.switch.as_ref(),
        }
    }
}

/// Overrides for one component family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentOverrides {
    /// Default size.
    pub size_type: Option<SizeType>,
    /// Default color.
    pub color_type: Option<ColorType>,
    /// Default corner.
    pub corner_type: Option<CornerType>,
    /// Per-size record overrides.
    pub sizes: SizeOverrides,
}

impl ComponentOverrides {
    pub(super) fn apply(&self, config: &mut ComponentConfig) {
        if let Some(size_type) = self.size_type {
            config.size_type = size_type;
        }
        if let Some(color_type) = self.color_type {
            config.color_type = color_type;
        }
        if let Some(corner_type) = self.corner_type {
            config.corner_type = corner_type;
        }
        for size in SizeType::ALL.iter().copied() {
            if let Some(style) = self.sizes.get(size) {
                style.apply(config.sizes.get_mut(size));
            }
        }
    }
}

/// Record overrides keyed by size name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizeOverrides {
    /// [`SizeType::ExtraSmall`] overrides.
    pub extra_small: Option<StyleOverrides>,
    /// [`SizeType::Small`] overrides.
    pub small: Option<StyleOverrides>,
    /// [`SizeType::Medium`] overrides.
    pub medium: Option<StyleOverrides>,
    /// [`SizeType::Large`] overrides.
    pub large: Option<StyleOverrides>,
    /// [`SizeType::ExtraLarge`] overrides.
    pub extra_large: Option<StyleOverrides>,
}

impl SizeOverrides {
    /// Overrides for one size, if any.
    #[must_use]
    pub const fn get(&self, size: SizeType) -> Option<&StyleOverrides> {
        match size {
            SizeType::ExtraSmall => self.extra_small.as_ref(),
            SizeType::Small => self.small.as_ref(),
            SizeType::Medium => self.medium.as_ref(),
            SizeType::Large => self.large.as_ref(),
            SizeType::ExtraLarge => self.extra_large.as_ref(),
        }
    }
}

/// Field-by-field overrides of a [`StyleConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    /// See [`StyleConfig::height`].
    pub height: Option<f32>,
    /// See [`StyleConfig::horizontal_padding`].
    pub horizontal_padding: Option<f32>,
    /// See [`StyleConfig::border_width`].
    pub border_width: Option<f32>,
    /// See [`StyleConfig::icon_size`].
    pub icon_size: Option<f32>,
    /// See [`StyleConfig::icon_interval`].
    pub icon_interval: Option<f32>,
    /// See [`StyleConfig::font_size`].
    pub font_size: Option<f32>,
    /// See [`StyleConfig::font_weight`].
    pub font_weight: Option<FontWeight>,
    /// See [`StyleConfig::letter_spacing`].
    pub letter_spacing: Option<f32>,
}

impl StyleOverrides {
    fn apply(&self, style: &mut StyleConfig) {
        let lengths = [
            (self.height, &mut style.height),
            (self.horizontal_padding, &mut style.horizontal_padding),
            (self.border_width, &mut style.border_width),
            (self.icon_size, &mut style.icon_size),
            (self.icon_interval, &mut style.icon_interval),
            (self.font_size, &mut style.font_size),
        ];
        for (value, slot) in lengths {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(weight) = self.font_weight {
            style.font_weight = weight;
        }
        if self.letter_spacing.is_some() {
            style.letter_spacing = self.letter_spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_changes_nothing() {
        let overrides: ConfigOverrides = toml::from_str("").unwrap();
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConfigOverrides>("[button]\nwidth = 3.0").is_err());
        assert!(toml::from_str::<ConfigOverrides>("[button.sizes.huge]\nheight = 3.0").is_err());
    }

    #[test]
    fn style_overrides_apply_field_by_field() {
        let mut style = super::super::resolve_style(ComponentKind::Radio, SizeType::Large);
        let before = style;
        StyleOverrides {
            icon_size: Some(30.0),
            font_weight: Some(FontWeight::BOLD),
            ..StyleOverrides::default()
        }
        .apply(&mut style);

        assert!((style.icon_size - 30.0).abs() < f32::EPSILON);
        assert_eq!(style.font_weight, FontWeight::BOLD);
        assert!((style.height - before.height).abs() < f32::EPSILON);
        assert_eq!(style.letter_spacing, before.letter_spacing);
    }
}
