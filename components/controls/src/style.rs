//! Pieces shared by every widget's style table.

use flex_ui_color::Color;
use flex_ui_core::Interaction;

/// Scale of a pressed widget with the scale effect on.
pub const PRESSED_SCALE: f32 = 0.992;
/// Scale of a hovered widget with the scale effect on.
pub const HOVERED_SCALE: f32 = 1.012;

/// Content color drawn on a solid `color` fill: white on dark colors, black
/// otherwise.
#[must_use]
pub fn on_color(color: Color) -> Color {
    if color.is_dark() {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Press and hover scale shared by buttons and button radios.
#[must_use]
pub const fn interaction_scale(interaction: Interaction, scale_effect: bool) -> f32 {
    if !scale_effect {
        return 1.0;
    }
    match interaction {
        Interaction::Pressed => PRESSED_SCALE,
        Interaction::Hovered => HOVERED_SCALE,
        Interaction::Disabled | Interaction::Idle => 1.0,
    }
}

/// Picks one of four values by interaction.
pub(crate) fn by_interaction<T: Copy>(
    interaction: Interaction,
    disabled: T,
    pressed: T,
    hovered: T,
    idle: T,
) -> T {
    match interaction {
        Interaction::Disabled => disabled,
        Interaction::Pressed => pressed,
        Interaction::Hovered => hovered,
        Interaction::Idle => idle,
    }
}
