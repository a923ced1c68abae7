//! Bearer credentials and the holder that shares them with the dispatcher.

pub mod credential;
pub mod holder;
pub mod secret;

pub use credential::*;
pub use holder::*;
pub use secret::*;
