//! Built-in size tables.

use super::{SizeTable, StyleConfig};
use crate::types::FontWeight;

const fn style(
    height: f32,
    horizontal_padding: f32,
    border_width: f32,
    icon_size: f32,
    icon_interval: f32,
    font_size: f32,
) -> StyleConfig {
    StyleConfig {
        height,
        horizontal_padding,
        border_width,
        icon_size,
        icon_interval,
        font_size,
        font_weight: FontWeight::MEDIUM,
        letter_spacing: None,
    }
}

pub(super) static BUTTON: SizeTable = SizeTable::new([
    style(24.0, 8.0, 1.0, 14.0, 4.0, 12.0),
    style(28.0, 12.0, 1.0, 16.0, 4.0, 13.0),
    style(32.0, 16.0, 1.0, 18.0, 6.0, 14.0),
    style(36.0, 20.0, 1.0, 20.0, 6.0, 15.0),
    style(40.0, 24.0, 1.0, 22.0, 8.0, 16.0),
]);

// icon_size is the ring diameter, icon_interval the ring-to-label gap.
pub(super) static RADIO: SizeTable = SizeTable::new([
    style(24.0, 8.0, 1.0, 12.0, 6.0, 12.0),
    style(28.0, 10.0, 1.0, 14.0, 6.0, 13.0),
    style(32.0, 12.0, 1.0, 16.0, 8.0, 14.0),
    style(36.0, 14.0, 1.5, 18.0, 8.0, 15.0),
    style(40.0, 16.0, 2.0, 20.0, 10.0, 16.0),
]);

// height is the track height, icon_size the thumb diameter and
// horizontal_padding the thumb inset.
pub(super) static SWITCH: SizeTable = SizeTable::new([
    style(16.0, 2.0, 1.0, 12.0, 6.0, 12.0),
    style(20.0, 2.0, 1.0, 16.0, 6.0, 13.0),
    style(24.0, 3.0, 1.0, 18.0, 8.0, 14.0),
    style(28.0, 3.0, 1.5, 22.0, 8.0, 15.0),
    style(32.0, 4.0, 2.0, 24.0, 10.0, 16.0),
]);
