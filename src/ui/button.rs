/// Event-driven button state machine.
///
/// Input handling is decoupled from rendering: the host feeds discrete
/// pointer events in, and reads the state back when it draws. A click is
/// reported exactly once, on release while pressed with the pointer still
/// inside the bounds.

/// Rectangular hit area in window coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ButtonBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ButtonBounds {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Hovered,
    Pressed,
}

/// Discrete pointer input, as delivered by the host's event loop.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Moved { x: i32, y: i32 },
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSignal {
    Clicked,
}

pub struct Button {
    pub bounds: ButtonBounds,
    state: ButtonState,
    pointer_inside: bool,
}

impl Button {
    pub fn new(bounds: ButtonBounds) -> Self {
        Self {
            bounds,
            state: ButtonState::Idle,
            pointer_inside: false,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Advance the state machine by one input event.
    pub fn handle(&mut self, event: PointerEvent) -> Option<ButtonSignal> {
        match event {
            PointerEvent::Moved { x, y } => {
                self.pointer_inside = self.bounds.contains(x, y);
                match self.state {
                    ButtonState::Idle if self.pointer_inside => {
                        self.state = ButtonState::Hovered;
                    }
                    ButtonState::Hovered if !self.pointer_inside => {
                        self.state = ButtonState::Idle;
                    }
                    // A press stays held while the pointer wanders; whether
                    // it counts is decided on release.
                    _ => {}
                }
                None
            }
            PointerEvent::Pressed => {
                if self.state == ButtonState::Hovered {
                    self.state = ButtonState::Pressed;
                }
                None
            }
            PointerEvent::Released => {
                if self.state != ButtonState::Pressed {
                    return None;
                }
                if self.pointer_inside {
                    self.state = ButtonState::Hovered;
                    Some(ButtonSignal::Clicked)
                } else {
                    self.state = ButtonState::Idle;
                    None
                }
            }
        }
    }
}
