//! Buttons.
//!
//! [`button_style`] is the pure style table; [`FlexButton`] is the builder a
//! host mounts into a live [`ButtonInstance`] which tracks the pointer and
//! animates between targets.
//!
//! ```
//! use std::time::Duration;
//! use flex_ui_controls::button::button;
//! use flex_ui_core::{Environment, PointerEvent};
//!
//! let env = Environment::new();
//! let mut instance = button("Save").mount(&env);
//! instance.handle(PointerEvent::Enter);
//! let frame = instance.frame(Duration::from_millis(16));
//! assert_eq!(frame.text, "Save");
//! ```

use core::time::Duration;

use flex_ui_color::Color;
use flex_ui_core::{
    AnimationSpec, Environment, FlexConfig, FlexTheme, InteractionSource, InteractionState, Memo,
    PointerEvent, StyleConfig, Transition, impl_debug,
    theme::{config, theme},
    types::{ButtonType, ColorType, ComponentKind, CornerType, FontWeight, IconPosition, SizeType},
};

use crate::style::{by_interaction, interaction_scale, on_color};

/// Colors and scale of a button for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    /// Border stroke color.
    pub border: Color,
    /// Fill color.
    pub background: Color,
    /// Text and icon color.
    pub font: Color,
    /// Uniform scale around the center.
    pub scale: f32,
}

/// Computes the style of a button whose base color is `color`.
///
/// Pure and total; the interaction is resolved with the usual precedence, so
/// a disabled button looks the same whether or not it is hovered or pressed.
#[must_use]
pub fn button_style(
    color: Color,
    button_type: ButtonType,
    state: InteractionState,
    scale_effect: bool,
) -> ButtonStyle {
    let interaction = state.interaction();
    let pick = |disabled, pressed, hovered, idle| {
        by_interaction(interaction, disabled, pressed, hovered, idle)
    };

    let outlined = || {
        pick(
            color.with_alpha(0.6),
            color.shade(0.9),
            color.shade(1.15),
            color,
        )
    };

    let border = match button_type {
        ButtonType::Default | ButtonType::Dashed => outlined(),
        ButtonType::Primary | ButtonType::Filled | ButtonType::Text | ButtonType::Link => {
            color.with_alpha(0.0)
        }
    };

    let background = match button_type {
        ButtonType::Primary => pick(
            color.with_alpha(0.6),
            color.shade(0.95),
            color.shade(1.1),
            color,
        ),
        ButtonType::Filled => pick(
            color.with_alpha(0.08),
            color.with_alpha(0.2),
            color.with_alpha(0.15),
            color.with_alpha(0.1),
        ),
        ButtonType::Text => pick(
            color.with_alpha(0.0),
            color.with_alpha(0.2),
            color.with_alpha(0.1),
            color.with_alpha(0.0),
        ),
        ButtonType::Default | ButtonType::Dashed | ButtonType::Link => color.with_alpha(0.0),
    };

    let font = match button_type {
        ButtonType::Primary => {
            let content = on_color(color);
            if state.enabled {
                content
            } else {
                content.with_alpha(0.9)
            }
        }
        ButtonType::Filled | ButtonType::Text => {
            if state.enabled {
                color
            } else {
                color.with_alpha(0.8)
            }
        }
        ButtonType::Link => pick(
            color.with_alpha(0.8),
            color.shade(0.85),
            color.shade(1.2),
            color,
        ),
        ButtonType::Default | ButtonType::Dashed => outlined(),
    };

    ButtonStyle {
        border,
        background,
        font,
        scale: interaction_scale(interaction, scale_effect),
    }
}

/// How the host strokes the button outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// Continuous stroke.
    Solid,
    /// Dashed stroke.
    Dashed,
    /// No stroke.
    None,
}

impl BorderStyle {
    /// The stroke used by a button type.
    #[must_use]
    pub const fn of(button_type: ButtonType) -> Self {
        match button_type {
            ButtonType::Default => Self::Solid,
            ButtonType::Dashed => Self::Dashed,
            ButtonType::Primary | ButtonType::Filled | ButtonType::Text | ButtonType::Link => {
                Self::None
            }
        }
    }
}

type Callback = Box<dyn FnMut()>;

/// Builder for a button.
///
/// Size, color, corner and button type left unset fall back to the
/// [`FlexConfig`] installed in the environment at mount time.
pub struct FlexButton {
    text: String,
    icon: Option<String>,
    size_type: Option<SizeType>,
    color_type: Option<ColorType>,
    corner_type: Option<CornerType>,
    button_type: Option<ButtonType>,
    icon_position: IconPosition,
    icon_rotation: f32,
    scale_effect: bool,
    enabled: bool,
    on_click: Option<Callback>,
}

impl_debug!(FlexButton);

impl FlexButton {
    /// Creates a button with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            size_type: None,
            color_type: None,
            corner_type: None,
            button_type: None,
            icon_position: IconPosition::default(),
            icon_rotation: 0.0,
            scale_effect: false,
            enabled: true,
            on_click: None,
        }
    }

    /// Sets the icon, identified by a host-defined name.
    #[must_use]
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    /// Sets the size preset.
    #[must_use]
    pub const fn size_type(mut self, size_type: SizeType) -> Self {
        self.size_type = Some(size_type);
        self
    }

    /// Sets the color preset.
    #[must_use]
    pub const fn color_type(mut self, color_type: ColorType) -> Self {
        self.color_type = Some(color_type);
        self
    }

    /// Sets the corner preset.
    #[must_use]
    pub const fn corner_type(mut self, corner_type: CornerType) -> Self {
        self.corner_type = Some(corner_type);
        self
    }

    /// Sets the button type.
    #[must_use]
    pub const fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    /// Places the icon before or after the text.
    #[must_use]
    pub const fn icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    /// Rotates the icon, in degrees.
    #[must_use]
    pub const fn icon_rotation(mut self, degrees: f32) -> Self {
        self.icon_rotation = degrees;
        self
    }

    /// Enables or disables the hover and press scale. Off by default.
    #[must_use]
    pub const fn scale_effect(mut self, enabled: bool) -> Self {
        self.scale_effect = enabled;
        self
    }

    /// Sets whether the button accepts clicks.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Resolves unset presets against `env` and creates a live instance.
    #[must_use]
    pub fn mount(self, env: &Environment) -> ButtonInstance {
        ButtonInstance::new(self, env)
    }
}

/// Creates a button with the given text.
#[must_use]
pub fn button(text: impl Into<String>) -> FlexButton {
    FlexButton::new(text)
}

/// Everything a host needs to paint a button for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonFrame {
    /// Border stroke color.
    pub border_color: Color,
    /// Fill color.
    pub background_color: Color,
    /// Text and icon color.
    pub font_color: Color,
    /// Outer height.
    pub height: f32,
    /// Outer width for icon-only buttons; `None` sizes to content.
    pub width: Option<f32>,
    /// Padding on each side of the content.
    pub horizontal_padding: f32,
    /// Corner radius.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Border stroke style.
    pub border_style: BorderStyle,
    /// Uniform scale around the center.
    pub scale: f32,
    /// Icon name, if any.
    pub icon: Option<String>,
    /// Icon edge length.
    pub icon_size: f32,
    /// Icon rotation in degrees.
    pub icon_rotation: f32,
    /// Gap between icon and text.
    pub icon_gap: f32,
    /// Whether the icon precedes the text.
    pub icon_leading: bool,
    /// Text size.
    pub font_size: f32,
    /// Text weight.
    pub font_weight: FontWeight,
    /// Letter spacing, if configured.
    pub letter_spacing: Option<f32>,
    /// The text with surrounding whitespace removed.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
struct TargetKey {
    color: Color,
    button_type: ButtonType,
    state: InteractionState,
    scale_effect: bool,
    style: StyleConfig,
    corner_type: CornerType,
    icon_only: bool,
    icon_rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Targets {
    style: ButtonStyle,
    height: f32,
    padding: f32,
    corner: f32,
    font_size: f32,
    icon_size: f32,
    border_width: f32,
    icon_rotation: f32,
    letter_spacing: Option<f32>,
}

impl Targets {
    fn compute(key: &TargetKey) -> Self {
        let height = key.style.height;
        Self {
            style: button_style(key.color, key.button_type, key.state, key.scale_effect),
            height,
            padding: if key.icon_only {
                0.0
            } else {
                key.style.horizontal_padding
            },
            corner: key.corner_type.radius(height),
            font_size: key.style.font_size,
            icon_size: key.style.icon_size,
            border_width: key.style.border_width,
            icon_rotation: key.icon_rotation,
            letter_spacing: key.style.letter_spacing,
        }
    }
}

/// A mounted button.
pub struct ButtonInstance {
    theme: FlexTheme,
    config: alloc::rc::Rc<FlexConfig>,
    text: String,
    icon: Option<String>,
    size_type: SizeType,
    color_type: ColorType,
    corner_type: CornerType,
    button_type: ButtonType,
    icon_position: IconPosition,
    icon_rotation: f32,
    scale_effect: bool,
    enabled: bool,
    on_click: Option<Callback>,
    source: InteractionSource,
    targets: Memo<TargetKey, Targets>,
    border: Transition<Color>,
    background: Transition<Color>,
    font: Transition<Color>,
    scale: Transition<f32>,
    height: Transition<f32>,
    padding: Transition<f32>,
    corner: Transition<f32>,
    font_size: Transition<f32>,
    icon_size: Transition<f32>,
    border_width: Transition<f32>,
    rotation: Transition<f32>,
    letter_spacing: Option<Transition<f32>>,
}

impl_debug!(ButtonInstance);

impl ButtonInstance {
    fn new(button: FlexButton, env: &Environment) -> Self {
        let theme = theme(env);
        let config = config(env);
        let defaults = config.component(ComponentKind::Button);
        let spec = AnimationSpec::default();

        let mut instance = Self {
            size_type: button.size_type.unwrap_or(defaults.size_type),
            color_type: button.color_type.unwrap_or(defaults.color_type),
            corner_type: button.corner_type.unwrap_or(defaults.corner_type),
            button_type: button.button_type.unwrap_or(config.button_type),
            text: button.text,
            icon: button.icon,
            icon_position: button.icon_position,
            icon_rotation: button.icon_rotation,
            scale_effect: button.scale_effect,
            enabled: button.enabled,
            on_click: button.on_click,
            source: InteractionSource::new(),
            targets: Memo::new(),
            border: Transition::new(Color::TRANSPARENT, spec),
            background: Transition::new(Color::TRANSPARENT, spec),
            font: Transition::new(Color::TRANSPARENT, spec),
            scale: Transition::new(1.0, spec),
            height: Transition::new(0.0, spec),
            padding: Transition::new(0.0, spec),
            corner: Transition::new(0.0, spec),
            font_size: Transition::new(0.0, spec),
            icon_size: Transition::new(0.0, spec),
            border_width: Transition::new(0.0, spec),
            rotation: Transition::new(0.0, spec),
            letter_spacing: None,
            theme,
            config,
        };

        let targets = instance.current_targets();
        instance.border.snap_to(targets.style.border);
        instance.background.snap_to(targets.style.background);
        instance.font.snap_to(targets.style.font);
        instance.scale.snap_to(targets.style.scale);
        instance.height.snap_to(targets.height);
        instance.padding.snap_to(targets.padding);
        instance.corner.snap_to(targets.corner);
        instance.font_size.snap_to(targets.font_size);
        instance.icon_size.snap_to(targets.icon_size);
        instance.border_width.snap_to(targets.border_width);
        instance.rotation.snap_to(targets.icon_rotation);
        instance.letter_spacing = targets
            .letter_spacing
            .map(|spacing| Transition::new(spacing, spec));
        instance
    }

    fn style_config(&self) -> StyleConfig {
        self.config
            .resolve_style(ComponentKind::Button, self.size_type)
    }

    fn is_icon_only(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn current_targets(&mut self) -> Targets {
        let key = TargetKey {
            color: self.theme.color(self.color_type),
            button_type: self.button_type,
            state: self.state(),
            scale_effect: self.scale_effect,
            style: self.style_config(),
            corner_type: self.corner_type,
            icon_only: self.is_icon_only(),
            icon_rotation: self.icon_rotation,
        };
        self.targets.get_or_compute(key, Targets::compute)
    }

    /// Feeds a pointer event; returns `true` if it clicked the button.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let clicked = self.source.handle(event, self.enabled);
        if clicked {
            tracing::debug!(target: "flex_ui::button", text = %self.text, "clicked");
            if let Some(handler) = self.on_click.as_mut() {
                handler();
            }
        }
        clicked
    }

    /// Current interaction flags.
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.source.state(self.enabled)
    }

    /// Whether the button accepts clicks.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the button. Disabling drops any press in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.source.handle(PointerEvent::Cancel, false);
        }
        self.enabled = enabled;
    }

    /// The button text as given.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The button type.
    #[must_use]
    pub const fn button_type(&self) -> ButtonType {
        self.button_type
    }

    /// Switches the button type; colors animate to the new table row.
    pub fn set_button_type(&mut self, button_type: ButtonType) {
        self.button_type = button_type;
    }

    /// The size preset.
    #[must_use]
    pub const fn size_type(&self) -> SizeType {
        self.size_type
    }

    /// Switches the size preset; dimensions animate to the new record.
    pub fn set_size_type(&mut self, size_type: SizeType) {
        self.size_type = size_type;
    }

    /// Icon rotation target, in degrees.
    #[must_use]
    pub const fn icon_rotation(&self) -> f32 {
        self.icon_rotation
    }

    /// Rotates the icon; the rotation animates to `degrees`.
    pub const fn set_icon_rotation(&mut self, degrees: f32) {
        self.icon_rotation = degrees;
    }

    /// Switches the color preset.
    pub fn set_color_type(&mut self, color_type: ColorType) {
        self.color_type = color_type;
    }

    /// Whether any attribute is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !(self.border.is_idle()
            && self.background.is_idle()
            && self.font.is_idle()
            && self.scale.is_idle()
            && self.height.is_idle()
            && self.padding.is_idle()
            && self.corner.is_idle()
            && self.font_size.is_idle()
            && self.icon_size.is_idle()
            && self.border_width.is_idle()
            && self.rotation.is_idle()
            && self.letter_spacing.as_ref().is_none_or(Transition::is_idle))
    }

    fn animate_letter_spacing(&mut self, target: Option<f32>, dt: Duration) -> Option<f32> {
        let Some(target) = target else {
            self.letter_spacing = None;
            return None;
        };
        let transition = self
            .letter_spacing
            .get_or_insert_with(|| Transition::new(target, AnimationSpec::default()));
        Some(transition.animate_to(target, dt))
    }

    /// Advances every transition by `dt` and returns the values to paint.
    pub fn frame(&mut self, dt: Duration) -> ButtonFrame {
        let targets = self.current_targets();
        let style = self.style_config();
        let blank = self.is_icon_only();

        let border_color = self.border.animate_to(targets.style.border, dt);
        let background_color = self.background.animate_to(targets.style.background, dt);
        let font_color = self.font.animate_to(targets.style.font, dt);
        let scale = self.scale.animate_to(targets.style.scale, dt);
        let height = self.height.animate_to(targets.height, dt);
        let horizontal_padding = self.padding.animate_to(targets.padding, dt);
        let corner_radius = self.corner.animate_to(targets.corner, dt);
        let font_size = self.font_size.animate_to(targets.font_size, dt);
        let icon_size = self.icon_size.animate_to(targets.icon_size, dt);
        let border_width = self.border_width.animate_to(targets.border_width, dt);
        let icon_rotation = self.rotation.animate_to(targets.icon_rotation, dt);
        let letter_spacing = self.animate_letter_spacing(targets.letter_spacing, dt);

        let text = self.text.trim();
        ButtonFrame {
            border_color,
            background_color,
            font_color,
            height,
            width: blank.then_some(height),
            horizontal_padding,
            corner_radius,
            border_width,
            border_style: BorderStyle::of(self.button_type),
            scale,
            icon: self.icon.clone(),
            icon_size,
            icon_rotation,
            icon_gap: if blank {
                0.0
            } else {
                style.icon_interval
            },
            icon_leading: self.icon_position == IconPosition::Start || blank,
            font_size,
            font_weight: style.font_weight,
            letter_spacing,
            text: text.to_owned(),
        }
    }
}
