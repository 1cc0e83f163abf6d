mod actions;
mod app_state;
mod dispatcher;
mod events;

pub use actions::*;
pub use app_state::*;
pub use dispatcher::*;
pub use events::*;
