//! Pointer interaction tracking.
//!
//! The host forwards raw [`PointerEvent`]s to an [`InteractionSource`]; widgets
//! read back an [`InteractionState`] and collapse it into a single
//! [`Interaction`] using the fixed precedence
//! **disabled > pressed > hovered > idle**.

/// Raw pointer events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// The pointer entered the widget bounds.
    Enter,
    /// The pointer left the widget bounds.
    Exit,
    /// A button went down over the widget.
    Press,
    /// A button went up over the widget.
    Release,
    /// The host aborted the gesture (scroll takeover, focus loss).
    Cancel,
}

/// Interaction flags of one widget for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionState {
    /// The pointer is over the widget.
    pub hovered: bool,
    /// The widget is being pressed.
    pub pressed: bool,
    /// The widget accepts input.
    pub enabled: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: false,
            pressed: false,
            enabled: true,
        }
    }
}

impl InteractionState {
    /// Collapses the flags using the widget precedence rule.
    #[must_use]
    pub const fn interaction(self) -> Interaction {
        Interaction::from_state(self)
    }
}

/// The single interaction that drives a widget's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The widget is disabled; other flags are ignored.
    Disabled,
    /// The widget is pressed.
    Pressed,
    /// The pointer hovers the widget.
    Hovered,
    /// No interaction.
    Idle,
}

impl Interaction {
    /// First match wins: disabled, then pressed, then hovered.
    #[must_use]
    pub const fn from_state(state: InteractionState) -> Self {
        if !state.enabled {
            Self::Disabled
        } else if state.pressed {
            Self::Pressed
        } else if state.hovered {
            Self::Hovered
        } else {
            Self::Idle
        }
    }
}

/// Tracks hover and press for one widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionSource {
    hovered: bool,
    pressed: bool,
}

impl InteractionSource {
    /// Creates an idle source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hovered: false,
            pressed: false,
        }
    }

    /// Feeds one event and returns `true` if it completed a click.
    ///
    /// A disabled widget still tracks hover but never becomes pressed.
    pub const fn handle(&mut self, event: PointerEvent, enabled: bool) -> bool {
        match event {
            PointerEvent::Enter => {
                self.hovered = true;
                false
            }
            PointerEvent::Exit => {
                self.hovered = false;
                self.pressed = false;
                false
            }
            PointerEvent::Press => {
                self.pressed = enabled;
                false
            }
            PointerEvent::Release => {
                let clicked = self.pressed && enabled;
                self.pressed = false;
                clicked
            }
            PointerEvent::Cancel => {
                self.pressed = false;
                false
            }
        }
    }

    /// Whether the pointer is over the widget.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the widget is pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Snapshot for the current frame.
    #[must_use]
    pub const fn state(&self, enabled: bool) -> InteractionState {
        InteractionState {
            hovered: self.hovered,
            pressed: self.pressed,
            enabled,
        }
    }

    /// Drops any hover or press, e.g. when the widget is hidden.
    pub const fn reset(&mut self) {
        self.hovered = false;
        self.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(hovered: bool, pressed: bool, enabled: bool) -> InteractionState {
        InteractionState {
            hovered,
            pressed,
            enabled,
        }
    }

    #[test]
    fn precedence_is_disabled_pressed_hovered() {
        assert_eq!(state(true, true, false).interaction(), Interaction::Disabled);
        assert_eq!(
            state(true, true, false).interaction(),
            state(false, false, false).interaction()
        );
        assert_eq!(state(true, true, true).interaction(), Interaction::Pressed);
        assert_eq!(state(true, false, true).interaction(), Interaction::Hovered);
        assert_eq!(state(false, false, true).interaction(), Interaction::Idle);
    }

    #[test]
    fn press_then_release_clicks() {
        let mut source = InteractionSource::new();
        assert!(!source.handle(PointerEvent::Enter, true));
        assert!(!source.handle(PointerEvent::Press, true));
        assert!(source.is_pressed());
        assert!(source.handle(PointerEvent::Release, true));
        assert!(!source.is_pressed());
        assert!(source.is_hovered());
    }

    #[test]
    fn release_without_press_does_not_click() {
        let mut source = InteractionSource::new();
        assert!(!source.handle(PointerEvent::Release, true));
    }

    #[test]
    fn cancel_and_exit_abort_the_press() {
        let mut source = InteractionSource::new();
        source.handle(PointerEvent::Press, true);
        source.handle(PointerEvent::Cancel, true);
        assert!(!source.handle(PointerEvent::Release, true));

        source.handle(PointerEvent::Enter, true);
        source.handle(PointerEvent::Press, true);
        source.handle(PointerEvent::Exit, true);
        assert!(!source.is_hovered());
        assert!(!source.handle(PointerEvent::Release, true));
    }

    #[test]
    fn disabled_widgets_never_press() {
        let mut source = InteractionSource::new();
        source.handle(PointerEvent::Enter, false);
        source.handle(PointerEvent::Press, false);
        assert!(source.is_hovered());
        assert!(!source.is_pressed());
        assert!(!source.handle(PointerEvent::Release, false));
    }
}
