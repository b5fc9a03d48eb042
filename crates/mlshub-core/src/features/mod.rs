//! Screen-level models the presentation layer binds to.
//!
//! - `TeamSelection` / `TeamConfirmation`: onboarding
//! - `HomeModel`: the selected team's matches and standings

pub mod home;
pub mod selection;

pub use home::{HomeModel, HomeState, PLACEHOLDER_LOGO};
pub use selection::{ConfirmationState, TeamConfirmation, TeamSelection};
