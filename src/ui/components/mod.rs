//! UI components for the movement timeline
//!
//! One widget per file: the use/delete actions for a movement entry, the
//! two segment row kinds, and the timeline container that wires rows to the
//! event channel.

mod movement_actions;
mod rectilinear_row;
mod timeline;
mod wait_row;

pub use movement_actions::MovementActions;
pub use rectilinear_row::RectilinearRow;
pub use timeline::{Timeline, TimelineRow};
pub use wait_row::WaitRow;
