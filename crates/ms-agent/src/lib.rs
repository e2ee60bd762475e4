//! `ms-agent` — the agent contract the simulation driver is generic over.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`agent`]      | `Agent` trait                                            |
//! | [`countdown`]  | `Countdown`, finishes after a fixed number of ticks      |
//!
//! # Design notes
//!
//! The driver never inspects agent state directly.  Everything it needs goes
//! through the five queries on [`Agent`]; how a single agent decides where to
//! move next is entirely its own business.  Agents are assumed mutually
//! independent: none of the trait methods receive any other agent or any
//! shared simulation state.

pub mod agent;
pub mod countdown;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use countdown::Countdown;
