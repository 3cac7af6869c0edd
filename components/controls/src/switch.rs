//! On/off switches backed by a reactive binding.

use alloc::rc::Rc;
use core::time::Duration;

use flex_ui_color::Color;
use flex_ui_core::{
    AnimationSpec, Environment, FlexConfig, FlexTheme, Interaction, InteractionSource,
    InteractionState, Memo, PointerEvent, StyleConfig, Transition, impl_debug,
    theme::{config, theme},
    types::{ColorType, ComponentKind, CornerType, SizeType, SwitchType},
};
use nami::{Binding, Signal};

use crate::style::by_interaction;

/// Track width as a multiple of the switch height.
pub const TRACK_ASPECT: f32 = 1.75;

/// Thumb scale of a pressed switch with the scale effect on.
pub const PRESSED_THUMB_SCALE: f32 = 0.9;

/// Colors of a switch for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchColors {
    /// Track fill.
    pub track: Color,
    /// Track outline.
    pub border: Color,
    /// Thumb fill.
    pub thumb: Color,
}

/// Computes the colors of a switch whose base color is `color`.
#[must_use]
pub fn switch_colors(
    color: Color,
    switch_type: SwitchType,
    checked: bool,
    state: InteractionState,
) -> SwitchColors {
    let interaction = state.interaction();
    let pick = |disabled, pressed, hovered, idle| {
        by_interaction(interaction, disabled, pressed, hovered, idle)
    };

    match switch_type {
        SwitchType::Default => SwitchColors {
            track: if checked {
                pick(
                    color.with_alpha(0.6),
                    color.shade(0.95),
                    color.shade(1.1),
                    color,
                )
            } else {
                pick(
                    color.with_alpha(0.08),
                    color.with_alpha(0.3),
                    color.with_alpha(0.25),
                    color.with_alpha(0.2),
                )
            },
            border: color.with_alpha(0.0),
            thumb: if state.enabled {
                Color::WHITE
            } else {
                Color::WHITE.with_alpha(0.8)
            },
        },
        SwitchType::Outlined => SwitchColors {
            track: pick(
                color.with_alpha(0.0),
                color.with_alpha(0.1),
                color.with_alpha(0.05),
                color.with_alpha(0.0),
            ),
            border: pick(
                color.with_alpha(0.3),
                color.shade(0.9),
                color.shade(1.15),
                color,
            ),
            thumb: if checked {
                pick(
                    color.with_alpha(0.6),
                    color.shade(0.9),
                    color.shade(1.15),
                    color,
                )
            } else {
                pick(
                    color.with_alpha(0.3),
                    color.with_alpha(0.6),
                    color.with_alpha(0.6),
                    color.with_alpha(0.5),
                )
            },
        },
    }
}

type ChangeHandler = Box<dyn FnMut(bool)>;

/// Builder for a switch.
pub struct FlexSwitch {
    checked: Binding<bool>,
    size_type: Option<SizeType>,
    color_type: Option<ColorType>,
    corner_type: Option<CornerType>,
    switch_type: Option<SwitchType>,
    scale_effect: bool,
    enabled: bool,
    on_checked_change: Option<ChangeHandler>,
}

impl_debug!(FlexSwitch);

impl FlexSwitch {
    /// Creates a switch reading and writing `checked`.
    #[must_use]
    pub fn new(checked: &Binding<bool>) -> Self {
        Self {
            checked: checked.clone(),
            size_type: None,
            color_type: None,
            corner_type: None,
            switch_type: None,
            scale_effect: false,
            enabled: true,
            on_checked_change: None,
        }
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

    /// Sets the switch type.
    #[must_use]
    pub const fn switch_type(mut self, switch_type: SwitchType) -> Self {
        self.switch_type = Some(switch_type);
        self
    }

    /// Enables or disables the press shrink of the thumb. Off by default.
    #[must_use]
    pub const fn scale_effect(mut self, enabled: bool) -> Self {
        self.scale_effect = enabled;
        self
    }

    /// Sets whether the switch accepts clicks.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the handler called with the new state after a click.
    #[must_use]
    pub fn on_checked_change(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_checked_change = Some(Box::new(handler));
        self
    }

    /// Resolves unset presets against `env` and creates a live instance.
    #[must_use]
    pub fn mount(self, env: &Environment) -> SwitchInstance {
        SwitchInstance::new(self, env)
    }
}

/// Creates a switch reading and writing `checked`.
#[must_use]
pub fn switch(checked: &Binding<bool>) -> FlexSwitch {
    FlexSwitch::new(checked)
}

/// Everything a host needs to paint a switch for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchFrame {
    /// Whether the switch is on.
    pub checked: bool,
    /// Track fill.
    pub track_color: Color,
    /// Track outline.
    pub border_color: Color,
    /// Thumb fill.
    pub thumb_color: Color,
    /// Track width.
    pub width: f32,
    /// Track height.
    pub height: f32,
    /// Track outline width.
    pub border_width: f32,
    /// Gap between track edge and thumb.
    pub padding: f32,
    /// Thumb edge length.
    pub thumb_size: f32,
    /// Thumb distance from its resting position on the off side.
    pub thumb_offset: f32,
    /// Thumb scale around its center.
    pub thumb_scale: f32,
    /// Track corner radius.
    pub track_corner_radius: f32,
    /// Thumb corner radius.
    pub thumb_corner_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TargetKey {
    color: Color,
    switch_type: SwitchType,
    checked: bool,
    state: InteractionState,
    scale_effect: bool,
    style: StyleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Targets {
    colors: SwitchColors,
    offset: f32,
    thumb_scale: f32,
}

impl Targets {
    fn compute(key: &TargetKey) -> Self {
        let pressed = key.state.interaction() == Interaction::Pressed;
        Self {
            colors: switch_colors(key.color, key.switch_type, key.checked, key.state),
            offset: if key.checked {
                thumb_travel(&key.style)
            } else {
                0.0
            },
            thumb_scale: if pressed && key.scale_effect {
                PRESSED_THUMB_SCALE
            } else {
                1.0
            },
        }
    }
}

/// Track width for a style record.
#[must_use]
pub fn track_width(style: &StyleConfig) -> f32 {
    style.height * TRACK_ASPECT
}

/// Distance the thumb travels between the off and on positions.
#[must_use]
pub fn thumb_travel(style: &StyleConfig) -> f32 {
    2.0f32
        .mul_add(-style.horizontal_padding, track_width(style) - style.icon_size)
        .max(0.0)
}

/// A mounted switch.
pub struct SwitchInstance {
    theme: FlexTheme,
    config: Rc<FlexConfig>,
    checked: Binding<bool>,
    size_type: SizeType,
    color_type: ColorType,
    corner_type: CornerType,
    switch_type: SwitchType,
    scale_effect: bool,
    enabled: bool,
    on_checked_change: Option<ChangeHandler>,
    source: InteractionSource,
    targets: Memo<TargetKey, Targets>,
    track: Transition<Color>,
    border: Transition<Color>,
    thumb: Transition<Color>,
    offset: Transition<f32>,
    thumb_scale: Transition<f32>,
}

impl_debug!(SwitchInstance);

impl SwitchInstance {
    fn new(switch: FlexSwitch, env: &Environment) -> Self {
        let theme = theme(env);
        let config = config(env);
        let defaults = config.component(ComponentKind::Switch);
        let spec = AnimationSpec::default();

        let mut instance = Self {
            size_type: switch.size_type.unwrap_or(defaults.size_type),
            color_type: switch.color_type.unwrap_or(defaults.color_type),
            corner_type: switch.corner_type.unwrap_or(defaults.corner_type),
            switch_type: switch.switch_type.unwrap_or(config.switch_type),
            checked: switch.checked,
            scale_effect: switch.scale_effect,
            enabled: switch.enabled,
            on_checked_change: switch.on_checked_change,
            source: InteractionSource::new(),
            targets: Memo::new(),
            track: Transition::new(Color::TRANSPARENT, spec),
            border: Transition::new(Color::TRANSPARENT, spec),
            thumb: Transition::new(Color::TRANSPARENT, spec),
            offset: Transition::new(0.0, spec),
            thumb_scale: Transition::new(1.0, spec),
            theme,
            config,
        };

        let targets = instance.current_targets();
        instance.track.snap_to(targets.colors.track);
        instance.border.snap_to(targets.colors.border);
        instance.thumb.snap_to(targets.colors.thumb);
        instance.offset.snap_to(targets.offset);
        instance.thumb_scale.snap_to(targets.thumb_scale);
        instance
    }

    fn style_config(&self) -> StyleConfig {
        self.config.resolve_style(ComponentKind::Switch, self.size_type)
    }

    fn current_targets(&mut self) -> Targets {
        let key = TargetKey {
            color: self.theme.color(self.color_type),
            switch_type: self.switch_type,
            checked: self.checked.get(),
            state: self.state(),
            scale_effect: self.scale_effect,
            style: self.style_config(),
        };
        self.targets.get_or_compute(key, Targets::compute)
    }

    /// Feeds a pointer event; a click toggles the binding.
    ///
    /// Returns `true` if the event toggled the switch.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        if !self.source.handle(event, self.enabled) {
            return false;
        }
        let checked = !self.checked.get();
        tracing::debug!(target: "flex_ui::switch", checked, "toggled");
        self.checked.set(checked);
        if let Some(handler) = self.on_checked_change.as_mut() {
            handler(checked);
        }
        true
    }

    /// Current interaction flags.
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.source.state(self.enabled)
    }

    /// Whether the switch is on.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Whether the switch accepts clicks.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the switch. Disabling drops any press in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.source.handle(PointerEvent::Cancel, false);
        }
        self.enabled = enabled;
    }

    /// Switches the switch type.
    pub fn set_switch_type(&mut self, switch_type: SwitchType) {
        self.switch_type = switch_type;
    }

    /// Switches the size preset.
    pub fn set_size_type(&mut self, size_type: SizeType) {
        self.size_type = size_type;
    }

    /// Whether any attribute is still animating.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        !(self.track.is_idle()
            && self.border.is_idle()
            && self.thumb.is_idle()
            && self.offset.is_idle()
            && self.thumb_scale.is_idle())
    }

    /// Advances every transition by `dt` and returns the values to paint.
    pub fn frame(&mut self, dt: Duration) -> SwitchFrame {
        let targets = self.current_targets();
        let style = self.style_config();

        SwitchFrame {
            checked: self.checked.get(),
            track_color: self.track.animate_to(targets.colors.track, dt),
            border_color: self.border.animate_to(targets.colors.border, dt),
            thumb_color: self.thumb.animate_to(targets.colors.thumb, dt),
            width: track_width(&style),
            height: style.height,
            border_width: style.border_width,
            padding: style.horizontal_padding,
            thumb_size: style.icon_size,
            thumb_offset: self.offset.animate_to(targets.offset, dt),
            thumb_scale: self.thumb_scale.animate_to(targets.thumb_scale, dt),
            track_corner_radius: self.corner_type.radius(style.height),
            thumb_corner_radius: self.corner_type.radius(style.icon_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use flex_ui_core::ColorScheme;
    use nami::binding;

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const SETTLE: Duration = Duration::from_secs(1);

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    fn state(hovered: bool, pressed: bool, enabled: bool) -> InteractionState {
        InteractionState {
            hovered,
            pressed,
            enabled,
        }
    }

    fn click(instance: &mut SwitchInstance) -> bool {
        instance.handle(PointerEvent::Enter);
        instance.handle(PointerEvent::Press);
        instance.handle(PointerEvent::Release)
    }

    #[test]
    fn default_type_table() {
        let color = ColorScheme::light().primary;

        let on = switch_colors(color, SwitchType::Default, true, state(false, false, true));
        assert_eq!(on.track, color);
        assert_eq!(on.thumb, Color::WHITE);
        assert!(approx_eq(on.border.alpha, 0.0, 0.0));

        let off = switch_colors(color, SwitchType::Default, false, state(true, false, true));
        assert!(approx_eq(off.track.alpha, 0.25, 1e-6));

        let disabled = switch_colors(color, SwitchType::Default, true, state(true, true, false));
        assert!(approx_eq(disabled.track.alpha, 0.6, 1e-6));
        assert!(approx_eq(disabled.thumb.alpha, 0.8, 1e-6));
    }

    #[test]
    fn outlined_type_table() {
        let color = ColorScheme::light().primary;

        let pressed = switch_colors(color, SwitchType::Outlined, true, state(true, true, true));
        assert!(approx_eq(pressed.track.alpha, 0.1, 1e-6));
        assert_eq!(pressed.border, color.shade(0.9));
        assert_eq!(pressed.thumb, color.shade(0.9));

        let off = switch_colors(color, SwitchType::Outlined, false, state(false, false, true));
        assert!(approx_eq(off.thumb.alpha, 0.5, 1e-6));
        assert_eq!(off.border, color);
    }

    #[test]
    fn click_toggles_and_notifies() {
        let checked: Binding<bool> = binding(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let env = Environment::new();
        let mut instance = switch(&checked)
            .on_checked_change({
                let seen = Rc::clone(&seen);
                move |value| seen.borrow_mut().push(value)
            })
            .mount(&env);

        assert!(click(&mut instance));
        assert!(checked.get());
        assert!(click(&mut instance));
        assert!(!checked.get());
        assert_eq!(&*seen.borrow(), &[true, false]);
    }

    #[test]
    fn disabled_switch_ignores_clicks() {
        let checked: Binding<bool> = binding(false);
        let env = Environment::new();
        let mut instance = switch(&checked).enabled(false).mount(&env);

        assert!(!click(&mut instance));
        assert!(!instance.is_checked());
    }

    #[test]
    fn thumb_travels_to_the_far_end() {
        let checked: Binding<bool> = binding(false);
        let env = Environment::new();
        let mut instance = switch(&checked).mount(&env);
        let style = flex_ui_core::config::resolve_style(ComponentKind::Switch, SizeType::Medium);

        let frame = instance.frame(FRAME);
        assert!(approx_eq(frame.thumb_offset, 0.0, 0.0));
        assert!(approx_eq(frame.width, style.height * TRACK_ASPECT, 1e-6));
        assert!(approx_eq(frame.track_corner_radius, style.height / 2.0, 1e-6));

        checked.set(true);
        let moving = instance.frame(FRAME).thumb_offset;
        let travel = frame.width - frame.thumb_size - 2.0 * frame.padding;
        assert!(moving > 0.0 && moving < travel);

        let settled = instance.frame(SETTLE);
        assert!(approx_eq(settled.thumb_offset, travel, 1e-4));
        assert!(!instance.is_animating());
    }

    #[test]
    fn pressed_thumb_shrinks() {
        let checked: Binding<bool> = binding(false);
        let env = Environment::new();
        let mut instance = switch(&checked).scale_effect(true).mount(&env);

        instance.handle(PointerEvent::Enter);
        instance.handle(PointerEvent::Press);
        let frame = instance.frame(SETTLE);
        assert!(approx_eq(frame.thumb_scale, PRESSED_THUMB_SCALE, 1e-6));

        let mut flat = switch(&checked).mount(&env);
        flat.handle(PointerEvent::Press);
        assert!(approx_eq(flat.frame(SETTLE).thumb_scale, 1.0, 0.0));
    }

    #[test]
    fn disabling_mid_press_drops_the_press() {
        let checked: Binding<bool> = binding(false);
        let env = Environment::new();
        let mut instance = switch(&checked).mount(&env);

        instance.handle(PointerEvent::Enter);
        instance.handle(PointerEvent::Press);
        instance.set_enabled(false);
        instance.set_enabled(true);
        assert!(!instance.state().pressed);
        assert!(instance.state().hovered);

        assert!(!instance.handle(PointerEvent::Release));
        assert!(!checked.get());
    }
}
