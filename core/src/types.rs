//! Closed token sets selecting a component's dimensions, colors, corners and
//! structural variant.
//!
//! All of these are plain `Copy` enumerations; a value outside the declared set
//! cannot be constructed, so every lookup keyed by them is total.

use serde::{Deserialize, Serialize};

token_enum! {
    /// Dimensional preset of a component.
    #[derive(Default)]
    pub enum SizeType {
        /// The most compact preset.
        ExtraSmall,
        /// Compact preset.
        Small,
        /// Default preset.
        #[default]
        Medium,
        /// Roomy preset.
        Large,
        /// The roomiest preset.
        ExtraLarge,
    }
}

token_enum! {
    /// Chromatic preset of a component, resolved against the active
    /// [`ColorScheme`](crate::theme::ColorScheme).
    #[derive(Default)]
    pub enum ColorType {
        /// The scheme's content color (`on_surface`).
        Default,
        /// The scheme's primary color.
        #[default]
        Primary,
        /// The scheme's secondary color.
        Secondary,
        /// The scheme's tertiary color.
        Tertiary,
        /// The scheme's error color.
        Error,
        /// The scheme's inverse primary color.
        Inverse,
    }
}

token_enum! {
    /// Corner rounding preset, expressed as a fraction of the component height.
    #[derive(Default)]
    pub enum CornerType {
        /// Square corners.
        None,
        /// 10% of the height.
        ExtraSmall,
        /// 15% of the height.
        Small,
        /// 20% of the height.
        #[default]
        Medium,
        /// 30% of the height.
        Large,
        /// 40% of the height.
        ExtraLarge,
        /// Fully rounded ends.
        Circle,
    }
}

impl CornerType {
    /// Corner radius as a fraction of the component height.
    #[must_use]
    pub const fn percent(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::ExtraSmall => 0.1,
            Self::Small => 0.15,
            Self::Medium => 0.2,
            Self::Large => 0.3,
            Self::ExtraLarge => 0.4,
            Self::Circle => 0.5,
        }
    }

    /// Corner radius for a component of the given height.
    #[must_use]
    pub fn radius(self, height: f32) -> f32 {
        height * self.percent()
    }
}

token_enum! {
    /// Structural style family of a button.
    #[derive(Default)]
    pub enum ButtonType {
        /// Solid background in the component color.
        Primary,
        /// Outlined with a solid border.
        #[default]
        Default,
        /// Outlined with a dashed border.
        Dashed,
        /// Translucent tinted background.
        Filled,
        /// No chrome until hovered or pressed.
        Text,
        /// Renders as a hyperlink; never paints a background.
        Link,
    }
}

token_enum! {
    /// Where a button places its icon relative to the text.
    #[derive(Default)]
    pub enum IconPosition {
        /// Before the text in reading order.
        Start,
        /// After the text in reading order.
        #[default]
        End,
    }
}

token_enum! {
    /// Structural style family of a radio group.
    #[derive(Default)]
    pub enum RadioType {
        /// A ring with a center dot followed by a label.
        #[default]
        Default,
        /// A segmented row of buttons.
        Button,
    }
}

token_enum! {
    /// How the selection of a button radio group moves between options.
    #[derive(Default)]
    pub enum RadioSwitchType {
        /// Each option fades its own background.
        #[default]
        None,
        /// A single indicator slides to the selected option.
        Swipe,
    }
}

token_enum! {
    /// Structural style family of a switch.
    #[derive(Default)]
    pub enum SwitchType {
        /// Filled track with a white thumb.
        #[default]
        Default,
        /// Outlined track with a colored thumb.
        Outlined,
    }
}

token_enum! {
    /// The widget families that own a size table.
    pub enum ComponentKind {
        /// [`ButtonType`] widgets.
        Button,
        /// [`RadioType`] widgets.
        Radio,
        /// [`SwitchType`] widgets.
        Switch,
    }
}

/// Font weight on the usual 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Weight 100.
    pub const THIN: Self = Self(100);
    /// Weight 300.
    pub const LIGHT: Self = Self(300);
    /// Weight 400.
    pub const NORMAL: Self = Self(400);
    /// Weight 500.
    pub const MEDIUM: Self = Self(500);
    /// Weight 600.
    pub const SEMI_BOLD: Self = Self(600);
    /// Weight 700.
    pub const BOLD: Self = Self(700);
    /// Weight 900.
    pub const BLACK: Self = Self(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_in_declaration_order() {
        assert_eq!(SizeType::COUNT, 5);
        for (index, size) in SizeType::ALL.iter().enumerate() {
            assert_eq!(size.index(), index);
        }
        assert!(SizeType::Small < SizeType::Medium);
        assert_eq!(ButtonType::ALL.len(), 6);
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(SizeType::ExtraLarge.to_string(), "ExtraLarge");
        assert_eq!(ColorType::Inverse.name(), "Inverse");
        assert_eq!(ButtonType::default(), ButtonType::Default);
        assert_eq!(ColorType::default(), ColorType::Primary);
    }

    #[test]
    fn corner_percent_grows_to_half() {
        let percents: Vec<f32> = CornerType::ALL.iter().map(|c| c.percent()).collect();
        assert!(percents.windows(2).all(|w| w[0] < w[1]));
        assert!((CornerType::Circle.radius(32.0) - 16.0).abs() < f32::EPSILON);
        assert!(CornerType::None.radius(32.0).abs() < f32::EPSILON);
    }

    #[test]
    fn serializes_with_snake_case_names() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Doc {
            size: SizeType,
            kind: RadioSwitchType,
        }

        let doc: Doc = toml::from_str("size = \"extra_small\"\nkind = \"swipe\"").unwrap();
        assert_eq!(
            doc,
            Doc {
                size: SizeType::ExtraSmall,
                kind: RadioSwitchType::Swipe,
            }
        );
    }
}
