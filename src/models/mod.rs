// Module exports for models

pub mod event;
pub mod theme;
pub mod view_state;
