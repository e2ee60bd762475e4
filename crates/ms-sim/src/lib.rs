//! `ms-sim` — simulation driver for the mouse_sim framework.
//!
//! # Lockstep tick loop
//!
//! ```text
//! while !sim.is_done():
//!   ① Progress  — every `progress_interval_ticks` (tick 0 included) report
//!                 the clock to the observer.
//!   ② Step      — tick every agent that is not yet done, in set-up order.
//!   ③ Advance   — clock += 1, whether or not any agent moved.
//! ```
//!
//! # Delegated run
//!
//! [`Sim::run_new_sim`] hands each agent its whole run via
//! [`Agent::run_to_completion`][ms_agent::Agent::run_to_completion] and
//! leaves the clock alone.  The two run modes rest on different assumptions
//! about how agent state advances; use one or the other on a given set of
//! agents, never both.
//!
//! # Quick-start
//!
//! ```rust
//! use ms_agent::Countdown;
//! use ms_core::{SimConfig, Tick};
//! use ms_sim::{NoopObserver, Sim};
//!
//! let mut sim: Sim<&str, Countdown> = Sim::new(SimConfig::default());
//! sim.set_up([("A", 2), ("B", 5)]).unwrap();
//! sim.run_full_sim(&mut NoopObserver).unwrap();
//! assert!(sim.is_done());
//! assert_eq!(sim.clock.current_tick, Tick(5));
//! ```

pub mod observer;
pub mod sim;


pub use observer::{LogObserver, NoopObserver, RunMode, SimObserver};
pub use sim::{Sim, SimState};
