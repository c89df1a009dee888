pub mod handler;
pub mod key_state;

pub use handler::InputHandler;
pub use key_state::{KeyStates, HOLD_FRAMES};
