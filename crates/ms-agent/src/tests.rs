//! Unit tests for ms-agent.

use ms_core::Tick;

use crate::{Agent, Countdown};

#[test]
fn zero_tick_countdown_is_done_immediately() {
    let c = Countdown::set_up(0).unwrap();
    assert!(c.is_done());
    assert_eq!(c.path(), &[Tick(0)]);
    assert_eq!(c.heat_data(), 0);
}

#[test]
fn countdown_finishes_after_configured_ticks() {
    let mut c = Countdown::set_up(3).unwrap();
    for expected_remaining in [2, 1] {
        c.tick().unwrap();
        assert!(!c.is_done());
        assert_eq!(c.remaining(), expected_remaining);
    }
    c.tick().unwrap();
    assert!(c.is_done());
    assert_eq!(c.path(), &[Tick(0), Tick(1), Tick(2), Tick(3)]);
    assert_eq!(c.heat_data(), 3);
}

#[test]
fn extra_tick_after_done_changes_nothing() {
    let mut c = Countdown::set_up(1).unwrap();
    c.tick().unwrap();
    let before = c.clone();
    c.tick().unwrap();
    assert_eq!(c, before);
}

#[test]
fn default_run_to_completion_ticks_until_done() {
    let mut c = Countdown::set_up(5).unwrap();
    c.run_to_completion().unwrap();
    assert!(c.is_done());
    assert_eq!(c.path().len(), 6);
}

/// Agent whose construction or stepping can fail.
mod fallible {
    use std::fmt;

    use crate::Agent;

    #[derive(Debug, PartialEq, Eq)]
    pub struct Stuck;

    impl fmt::Display for Stuck {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("stuck")
        }
    }

    impl std::error::Error for Stuck {}

    pub struct FailsAt {
        pub fail_at: u32,
        pub steps:   Vec<u32>,
    }

    impl Agent for FailsAt {
        type Config   = u32;
        type Position = u32;
        type Heat     = ();
        type Error    = Stuck;

        fn set_up(fail_at: u32) -> Result<Self, Stuck> {
            Ok(Self { fail_at, steps: vec![0] })
        }
        fn is_done(&self) -> bool {
            false
        }
        fn tick(&mut self) -> Result<(), Stuck> {
            let n = self.steps.len() as u32;
            if n == self.fail_at {
                return Err(Stuck);
            }
            self.steps.push(n);
            Ok(())
        }
        fn path(&self) -> &[u32] {
            &self.steps
        }
        fn heat_data(&self) {}
    }
}

#[test]
fn run_to_completion_propagates_tick_error() {
    let mut a = fallible::FailsAt::set_up(3).unwrap();
    assert_eq!(a.run_to_completion(), Err(fallible::Stuck));
    assert_eq!(a.path(), &[0, 1, 2]);
}
