//! The `Agent` trait, the main extension point for user code.

/// A stateful, independently simulated entity.
///
/// # Contract
///
/// - [`set_up`][Self::set_up] is called once per agent by the driver.
/// - [`tick`][Self::tick] is never called by the driver once
///   [`is_done`][Self::is_done] has returned `true`.
/// - Repeated `tick` calls must eventually make `is_done` true.  The driver
///   does not enforce this: an agent that never finishes makes a lockstep
///   run loop forever.
/// - `path` and `heat_data` report the agent's state at call time and have
///   no side effects.
///
/// Errors are the agent's own; the driver returns them to its caller
/// untouched.
///
/// # Example
///
/// ```rust
/// use ms_agent::Agent;
///
/// struct Walker { pos: i32, goal: i32, trail: Vec<i32> }
///
/// impl Agent for Walker {
///     type Config   = i32;
///     type Position = i32;
///     type Heat     = usize;
///     type Error    = std::convert::Infallible;
///
///     fn set_up(goal: i32) -> Result<Self, Self::Error> {
///         Ok(Walker { pos: 0, goal, trail: vec![0] })
///     }
///     fn is_done(&self) -> bool { self.pos >= self.goal }
///     fn tick(&mut self) -> Result<(), Self::Error> {
///         self.pos += 1;
///         self.trail.push(self.pos);
///         Ok(())
///     }
///     fn path(&self) -> &[i32] { &self.trail }
///     fn heat_data(&self) -> usize { self.trail.len() }
/// }
///
/// let mut w = Walker::set_up(3).unwrap();
/// w.run_to_completion().unwrap();
/// assert_eq!(w.path(), &[0, 1, 2, 3]);
/// ```
pub trait Agent: Sized {
    /// Per-agent construction payload.
    type Config;

    /// One entry of the recorded path.
    type Position: Clone;

    /// Snapshot type returned by [`heat_data`][Self::heat_data].
    type Heat;

    /// Failure raised by construction or by an invalid step.
    type Error: std::error::Error;

    /// Build an agent from its configuration.
    fn set_up(config: Self::Config) -> Result<Self, Self::Error>;

    /// `true` once the agent has reached a terminal state.
    fn is_done(&self) -> bool;

    /// Advance one time step.
    fn tick(&mut self) -> Result<(), Self::Error>;

    /// Positions visited so far, oldest first.
    fn path(&self) -> &[Self::Position];

    /// Owned snapshot of the agent's visit/intensity records.
    fn heat_data(&self) -> Self::Heat;

    /// Run this agent alone until it is done.
    ///
    /// Default: tick until [`is_done`][Self::is_done].  Agents with a faster
    /// self-contained routine may override it.
    fn run_to_completion(&mut self) -> Result<(), Self::Error> {
        while !self.is_done() {
            self.tick()?;
        }
        Ok(())
    }
}
