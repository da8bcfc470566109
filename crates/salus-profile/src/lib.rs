//! Profile listing and updating over the remote API, plus the UI-free
//! load/retry view-state machine backing the profile-selection screen.

pub mod list_state;
pub mod service;

pub use list_state::{LoadPhase, ProfileListState};
pub use service::ProfileService;

#[cfg(test)]
mod tests;
