pub mod headless;
pub mod human;

pub use headless::{HeadlessMode, HeadlessSummary, Steer};
pub use human::HumanMode;
