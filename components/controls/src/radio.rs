//! Radio groups.
//!
//! A [`FlexRadio`] shows one [`RadioOption`] per choice and writes the chosen
//! key into a [`Binding`]. [`RadioType::Default`] draws a ring with a dot in
//! front of each label; [`RadioType::Button`] draws a segmented row, optionally
//! with a single indicator that slides between segments
//! ([`RadioSwitchType::Swipe`]).

use alloc::rc::Rc;
use core::time::Duration;

use flex_ui_color::Color;
use flex_ui_core::{
    AnimationSpec, Environment, FlexConfig, FlexTheme, InteractionSource, InteractionState, Memo,
    PointerEvent, StyleConfig, Transition,
    theme::{config, theme},
    types::{ColorType, ComponentKind, CornerType, FontWeight, RadioSwitchType, RadioType, SizeType},
};
use nami::{Binding, Signal};

use crate::style::{by_interaction, interaction_scale, on_color};

/// One selectable entry of a radio group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption<K> {
    /// Value written to the selection binding.
    pub key: K,
    /// Text shown for the option.
    pub label: String,
    /// Whether the option accepts clicks.
    pub enabled: bool,
}

impl<K> RadioOption<K> {
    /// Creates an enabled option.
    #[must_use]
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            enabled: true,
        }
    }

    /// Sets whether the option accepts clicks.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Builds enabled options from `(key, label)` pairs.
#[must_use]
pub fn options_from<K, L, I>(items: I) -> Vec<RadioOption<K>>
where
    I: IntoIterator<Item = (K, L)>,
    L: Into<String>,
{
    items
        .into_iter()
        .map(|(key, label)| RadioOption::new(key, label))
        .collect()
}

/// Colors of one radio option for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioColors {
    /// The ring ([`RadioType::Default`]) or segment border ([`RadioType::Button`]).
    pub outline: Color,
    /// The center dot ([`RadioType::Default`]) or segment background
    /// ([`RadioType::Button`]).
    pub fill: Color,
    /// Label color.
    pub font: Color,
}

/// Computes the colors of one option whose base color is `color`.
///
/// `label` is the scheme's content color, used for the labels of
/// [`RadioType::Default`] groups.
#[must_use]
pub fn radio_colors(
    color: Color,
    label: Color,
    radio_type: RadioType,
    selected: bool,
    state: InteractionState,
) -> RadioColors {
    let interaction = state.interaction();
    let pick = |disabled, pressed, hovered, idle| {
        by_interaction(interaction, disabled, pressed, hovered, idle)
    };
    let resting = if selected { color } else { color.with_alpha(0.5) };

    match radio_type {
        RadioType::Default => RadioColors {
            outline: pick(
                color.with_alpha(if selected { 0.6 } else { 0.3 }),
                color.shade(0.9),
                color.shade(1.15),
                resting,
            ),
            fill: if selected {
                pick(
                    color.with_alpha(0.6),
                    color.shade(0.9),
                    color.shade(1.15),
                    color,
                )
            } else {
                color.with_alpha(0.0)
            },
            font: if state.enabled {
                label
            } else {
                label.with_alpha(0.6)
            },
        },
        RadioType::Button => RadioColors {
            outline: pick(
                color.with_alpha(0.3),
                color.shade(0.9),
                color.shade(1.15),
                resting,
            ),
            fill: if selected {
                pick(
                    color.with_alpha(0.6),
                    color.shade(0.95),
                    color.shade(1.1),
                    color,
                )
            } else {
                pick(
                    color.with_alpha(0.0),
                    color.with_alpha(0.2),
                    color.with_alpha(0.1),
                    color.with_alpha(0.0),
                )
            },
            font: if selected {
                let content = on_color(color);
                if state.enabled {
                    content
                } else {
                    content.with_alpha(0.9)
                }
            } else {
                pick(
                    color.with_alpha(0.6),
                    color.shade(0.9),
                    color.shade(1.15),
                    color,
                )
            },
        },
    }
}

type ChangeHandler<K> = Box<dyn FnMut(&K)>;

/// Builder for a radio group.
pub struct FlexRadio<K: 'static> {
    selection: Binding<K>,
    options: Vec<RadioOption<K>>,
    size_type: Option<SizeType>,
    color_type: Option<ColorType>,
    corner_type: Option<CornerType>,
    radio_type: Option<RadioType>,
    switch_type: Option<RadioSwitchType>,
    scale_effect: bool,
    enabled: bool,
    on_change: Option<ChangeHandler<K>>,
}

impl<K: 'static> core::fmt::Debug for FlexRadio<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlexRadio")
            .field("options", &self.options.len())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<K: Clone + PartialEq + 'static> FlexRadio<K> {
    /// Creates a group writing its selection into `selection`.
    #[must_use]
    pub fn new(selection: &Binding<K>, options: Vec<RadioOption<K>>) -> Self {
        Self {
            selection: selection.clone(),
            options,
            size_type: None,
            color_type: None,
            corner_type: None,
            radio_type: None,
            switch_type: None,
            scale_effect: false,
            enabled: true,
            on_change: None,
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

    /// Sets the radio type.
    #[must_use]
    pub const fn radio_type(mut self, radio_type: RadioType) -> Self {
        self.radio_type = Some(radio_type);
        self
    }

    /// Sets how the selection moves between button segments.
    #[must_use]
    pub const fn switch_type(mut self, switch_type: RadioSwitchType) -> Self {
        self.switch_type = Some(switch_type);
        self
    }

    /// Enables or disables the hover and press scale. Off by default.
    #[must_use]
    pub const fn scale_effect(mut self, enabled: bool) -> Self {
        self.scale_effect = enabled;
        self
    }

    /// Sets whether the whole group accepts clicks.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the handler called with the newly selected key.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(&K) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Resolves unset presets against `env` and creates a live instance.
    #[must_use]
    pub fn mount(self, env: &Environment) -> RadioInstance<K> {
        RadioInstance::new(self, env)
    }
}

/// Creates a radio group writing its selection into `selection`.
#[must_use]
pub fn radio<K: Clone + PartialEq + 'static>(
    selection: &Binding<K>,
    options: Vec<RadioOption<K>>,
) -> FlexRadio<K> {
    FlexRadio::new(selection, options)
}

/// Paint values of one option.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioOptionFrame {
    /// Option label.
    pub label: String,
    /// Whether this option is the selected one.
    pub selected: bool,
    /// Whether this option accepts clicks.
    pub enabled: bool,
    /// Ring or segment border color.
    pub outline_color: Color,
    /// Dot or segment background color.
    pub fill_color: Color,
    /// Label color.
    pub font_color: Color,
    /// Uniform scale of the option.
    pub scale: f32,
    /// Scale of the center dot, 0 when unselected.
    pub dot_scale: f32,
}

/// Paint values of the sliding indicator of a swipe group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorFrame {
    /// Fractional index of the option the indicator covers.
    pub position: f32,
    /// Indicator color.
    pub color: Color,
}

/// Everything a host needs to paint a radio group for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioFrame {
    /// Structural variant.
    pub radio_type: RadioType,
    /// Height of one option.
    pub height: f32,
    /// Padding on each side of a segment.
    pub horizontal_padding: f32,
    /// Segment corner radius.
    pub corner_radius: f32,
    /// Ring or segment border width.
    pub border_width: f32,
    /// Ring diameter.
    pub ring_size: f32,
    /// Gap between ring and label.
    pub label_gap: f32,
    /// Label size.
    pub font_size: f32,
    /// Label weight.
    pub font_weight: FontWeight,
    /// Label letter spacing, if configured.
    pub letter_spacing: Option<f32>,
    /// One frame per option, in order.
    pub options: Vec<RadioOptionFrame>,
    /// The sliding indicator of a swipe group with a selection.
    pub indicator: Option<IndicatorFrame>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OptionKey {
    color: Color,
    label: Color,
    radio_type: RadioType,
    swipe: bool,
    selected: bool,
    state: InteractionState,
    scale_effect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OptionTargets {
    colors: RadioColors,
    scale: f32,
    dot_scale: f32,
}

impl OptionTargets {
    fn compute(key: &OptionKey) -> Self {
        let mut colors = radio_colors(key.color, key.label, key.radio_type, key.selected, key.state);
        if key.swipe && key.selected {
            colors.fill = colors.fill.with_alpha(0.0);
        }
        Self {
            colors,
            scale: interaction_scale(key.state.interaction(), key.scale_effect),
            dot_scale: if key.selected { 1.0 } else { 0.0 },
        }
    }
}

struct OptionSlot<K> {
    option: RadioOption<K>,
    source: InteractionSource,
    targets: Memo<OptionKey, OptionTargets>,
    outline: Transition<Color>,
    fill: Transition<Color>,
    font: Transition<Color>,
    scale: Transition<f32>,
    dot_scale: Transition<f32>,
}

impl<K> OptionSlot<K> {
    fn new(option: RadioOption<K>, spec: AnimationSpec) -> Self {
        Self {
            option,
            source: InteractionSource::new(),
            targets: Memo::new(),
            outline: Transition::new(Color::TRANSPARENT, spec),
            fill: Transition::new(Color::TRANSPARENT, spec),
            font: Transition::new(Color::TRANSPARENT, spec),
            scale: Transition::new(1.0, spec),
            dot_scale: Transition::new(0.0, spec),
        }
    }

    fn snap(&mut self, targets: &OptionTargets) {
        self.outline.snap_to(targets.colors.outline);
        self.fill.snap_to(targets.colors.fill);
        self.font.snap_to(targets.colors.font);
        self.scale.snap_to(targets.scale);
        self.dot_scale.snap_to(targets.dot_scale);
    }

    fn animate(&mut self, targets: &OptionTargets, selected: bool, dt: Duration) -> RadioOptionFrame {
        RadioOptionFrame {
            label: self.option.label.clone(),
            selected,
            enabled: self.option.enabled,
            outline_color: self.outline.animate_to(targets.colors.outline, dt),
            fill_color: self.fill.animate_to(targets.colors.fill, dt),
            font_color: self.font.animate_to(targets.colors.font, dt),
            scale: self.scale.animate_to(targets.scale, dt),
            dot_scale: self.dot_scale.animate_to(targets.dot_scale, dt),
        }
    }

    const fn is_idle(&self) -> bool {
        self.outline.is_idle()
            && self.fill.is_idle()
            && self.font.is_idle()
            && self.scale.is_idle()
            && self.dot_scale.is_idle()
    }
}

/// A mounted radio group.
pub struct RadioInstance<K: 'static> {
    theme: FlexTheme,
    config: Rc<FlexConfig>,
    selection: Binding<K>,
    slots: Vec<OptionSlot<K>>,
    size_type: SizeType,
    color_type: ColorType,
    corner_type: CornerType,
    radio_type: RadioType,
    switch_type: RadioSwitchType,
    scale_effect: bool,
    enabled: bool,
    on_change: Option<ChangeHandler<K>>,
    indicator: Transition<f32>,
    indicator_color: Transition<Color>,
    indicator_visible: bool,
}

impl<K: 'static> core::fmt::Debug for RadioInstance<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RadioInstance")
            .field("options", &self.slots.len())
            .field("radio_type", &self.radio_type)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<K: Clone + PartialEq + 'static> RadioInstance<K> {
    fn new(radio: FlexRadio<K>, env: &Environment) -> Self {
        let theme = theme(env);
        let config = config(env);
        let defaults = config.component(ComponentKind::Radio);
        let spec = AnimationSpec::default();

        let mut instance = Self {
            size_type: radio.size_type.unwrap_or(defaults.size_type),
            color_type: radio.color_type.unwrap_or(defaults.color_type),
            corner_type: radio.corner_type.unwrap_or(defaults.corner_type),
            radio_type: radio.radio_type.unwrap_or(config.radio_type),
            switch_type: radio.switch_type.unwrap_or(config.radio_switch_type),
            selection: radio.selection,
            slots: radio
                .options
                .into_iter()
                .map(|option| OptionSlot::new(option, spec))
                .collect(),
            scale_effect: radio.scale_effect,
            enabled: radio.enabled,
            on_change: radio.on_change,
            indicator: Transition::new(0.0, spec),
            indicator_color: Transition::new(Color::TRANSPARENT, spec),
            indicator_visible: false,
            theme,
            config,
        };

        let selected = instance.selected_index();
        for index in 0..instance.slots.len() {
            let targets = instance.option_targets(index, selected);
            instance.slots[index].snap(&targets);
        }
        if let Some(index) = selected {
            instance.indicator.snap_to(index_position(index));
            instance.indicator_visible = instance.swipe();
        }
        let indicator_color = instance.indicator_target(selected);
        instance.indicator_color.snap_to(indicator_color);
        instance
    }

    /// Index of the option whose key equals the binding, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let current = self.selection.get();
        self.slots.iter().position(|slot| slot.option.key == current)
    }

    /// The options in display order.
    pub fn options(&self) -> impl Iterator<Item = &RadioOption<K>> {
        self.slots.iter().map(|slot| &slot.option)
    }

    /// Whether the group accepts clicks.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the whole group. Disabling drops any press in
    /// progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            for slot in &mut self.slots {
                slot.source.handle(PointerEvent::Cancel, false);
            }
        }
        self.enabled = enabled;
    }

    /// Enables or disables a single option. Out-of-range indices are ignored.
    pub fn set_option_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            if !enabled {
                slot.source.handle(PointerEvent::Cancel, false);
            }
            slot.option.enabled = enabled;
        }
    }

    /// Switches the radio type.
    pub fn set_radio_type(&mut self, radio_type: RadioType) {
        self.radio_type = radio_type;
    }

    /// Switches the size preset.
    pub fn set_size_type(&mut self, size_type: SizeType) {
        self.size_type = size_type;
    }

    fn option_enabled(&self, index: usize) -> bool {
        self.enabled && self.slots.get(index).is_some_and(|slot| slot.option.enabled)
    }

    fn swipe(&self) -> bool {
        self.radio_type == RadioType::Button && self.switch_type == RadioSwitchType::Swipe
    }

    /// Feeds a pointer event to the option at `index`.
    ///
    /// Returns `true` if the event selected a different option.
    pub fn handle(&mut self, index: usize, event: PointerEvent) -> bool {
        let enabled = self.option_enabled(index);
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        if !slot.source.handle(event, enabled) {
            return false;
        }

        let key = slot.option.key.clone();
        if self.selection.get() == key {
            return false;
        }
        tracing::debug!(target: "flex_ui::radio", index, label = %slot.option.label, "selected");
        self.selection.set(key.clone());
        if let Some(handler) = self.on_change.as_mut() {
            handler(&key);
        }
        true
    }

    fn option_targets(&mut self, index: usize, selected: Option<usize>) -> OptionTargets {
        let key = OptionKey {
            color: self.theme.color(self.color_type),
            label: self.theme.scheme().on_surface,
            radio_type: self.radio_type,
            swipe: self.swipe(),
            selected: selected == Some(index),
            state: self.slots[index].source.state(self.option_enabled(index)),
            scale_effect: self.scale_effect,
        };
        self.slots[index]
            .targets
            .get_or_compute(key, OptionTargets::compute)
    }

    fn indicator_target(&self, selected: Option<usize>) -> Color {
        let color = self.theme.color(self.color_type);
        match selected {
            Some(index) if self.swipe() => {
                let state = self.slots[index].source.state(self.option_enabled(index));
                radio_colors(color, color, RadioType::Button, true, state).fill
            }
            _ => color.with_alpha(0.0),
        }
    }

    fn style_config(&self) -> StyleConfig {
        self.config.resolve_style(ComponentKind::Radio, self.size_type)
    }

    /// Whether any attribute is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !(self.indicator.is_idle()
            && self.indicator_color.is_idle()
            && self.slots.iter().all(OptionSlot::is_idle))
    }

    /// Advances every transition by `dt` and returns the values to paint.
    pub fn frame(&mut self, dt: Duration) -> RadioFrame {
        let selected = self.selected_index();
        let style = self.style_config();

        let mut options = Vec::with_capacity(self.slots.len());
        for index in 0..self.slots.len() {
            let targets = self.option_targets(index, selected);
            options.push(self.slots[index].animate(&targets, selected == Some(index), dt));
        }

        let indicator_target = self.indicator_target(selected);
        let indicator_color = self.indicator_color.animate_to(indicator_target, dt);
        let indicator = match selected {
            Some(index) if self.swipe() => {
                let position = index_position(index);
                // A reappearing indicator starts at the selection.
                if !self.indicator_visible {
                    self.indicator.snap_to(position);
                    self.indicator_visible = true;
                }
                Some(IndicatorFrame {
                    position: self.indicator.animate_to(position, dt),
                    color: indicator_color,
                })
            }
            _ => {
                let resting = *self.indicator.target();
                self.indicator.snap_to(resting);
                self.indicator_visible = false;
                None
            }
        };

        RadioFrame {
            radio_type: self.radio_type,
            height: style.height,
            horizontal_padding: style.horizontal_padding,
            corner_radius: self.corner_type.radius(style.height),
            border_width: style.border_width,
            ring_size: style.icon_size,
            label_gap: style.icon_interval,
            font_size: style.font_size,
            font_weight: style.font_weight,
            letter_spacing: style.letter_spacing,
            options,
            indicator,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
const fn index_position(index: usize) -> f32 {
    index as f32
}
