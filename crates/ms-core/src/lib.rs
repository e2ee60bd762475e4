//! `ms-core` — foundational types for the `mouse_sim` framework.
//!
//! This crate is a dependency of every other `ms-*` crate.  It intentionally
//! has no `ms-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `MouseId`                                             |
//! | [`grid`]   | `Cell`, `Direction`, `Grid`                           |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]    | `AgentRng`, `agent_seed`                              |
//! | [`error`]  | `MsError`, `MsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MsError, MsResult};
pub use grid::{Cell, Direction, Grid};
pub use ids::MouseId;
pub use rng::{AgentRng, agent_seed};
pub use time::{SimClock, SimConfig, Tick};
