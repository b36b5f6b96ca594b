pub mod button;

pub use button::{Button, ButtonBounds, ButtonSignal, ButtonState, PointerEvent};
