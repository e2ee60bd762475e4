//! `ms-mouse` — a maze-walking mouse agent for the `mouse_sim` driver.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`config`]  | `MouseConfig`, `Strategy`                                    |
//! | [`heat`]    | `HeatMap`, `HeatRecord`, dense per-cell visit counts         |
//! | [`mouse`]   | `Mouse`, the [`ms_agent::Agent`] implementation              |
//! | [`loader`]  | CSV population loader                                        |
//! | [`error`]   | `MouseError`, `MouseResult<T>`                               |
//!
//! A mouse starts on an open cell of a shared [`ms_core::Grid`] and moves one
//! cell per tick until it stands on its goal or spends its step budget.  It
//! records every cell it occupies (its path) and how often it occupied each
//! one (its heat map).

pub mod config;
pub mod error;
pub mod heat;
pub mod loader;
pub mod mouse;


pub use config::{MouseConfig, Strategy};
pub use error::{MouseError, MouseResult};
pub use heat::{HeatMap, HeatRecord};
pub use loader::{load_population_csv, load_population_reader};
pub use mouse::Mouse;
