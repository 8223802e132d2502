//! Design System Components
//!
//! Small collection of reusable styled components used by the field panel.

mod button;
mod card;
mod input;
mod loading;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardBody};
pub use input::Input;
pub use loading::LoadingSpinner;
