mod button;
mod input;
mod status_banner;

pub use button::{Button, ButtonSize};
pub use input::TextInput;
pub use status_banner::StatusBanner;
