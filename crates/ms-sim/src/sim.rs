//! The `Sim` struct and its tick loop.

use std::collections::HashMap;
use std::hash::Hash;

use ms_agent::Agent;
use ms_core::{SimClock, SimConfig};

use crate::{RunMode, SimObserver};

// ── SimState ──────────────────────────────────────────────────────────────────

/// Where a driver is in its lifecycle.
///
/// ```text
/// Empty ──set_up──▶ Configured ──tick_all──▶ Stepping ──…──▶ Settled
/// ```
///
/// `Settled` is reached as soon as every agent reports done, which may be
/// straight after `set_up` when the population is empty or every agent
/// starts finished.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SimState {
    /// `set_up` has never been called.
    Empty,
    /// Agents built, no step taken yet.
    Configured,
    /// At least one step taken and some agent still running.
    Stepping,
    /// Every agent is done.
    Settled,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// `Sim<K, A>` exclusively owns an ordered collection of agents of type `A`,
/// each keyed by an identity `K`, and the logical clock shared by one run.
/// It never reaches into agent state; everything goes through [`Agent`].
///
/// Every fallible method returns the agent's own error type untouched: the
/// driver does no recovery, retry, or translation.  An agent error aborts the
/// current step and leaves the clock where it was.
///
/// # Liveness
///
/// [`run_full_sim`][Self::run_full_sim] loops until every agent reports
/// done.  An agent that never finishes makes it loop forever; bound such
/// agents with their own step budget.
pub struct Sim<K, A: Agent> {
    /// Run configuration (progress interval, seed).
    pub config: SimConfig,

    /// Simulation clock.  Advanced by [`tick_all`][Self::tick_all] and
    /// [`keep_time`][Self::keep_time] only.
    pub clock: SimClock,

    /// Agents in set-up order; replaced wholesale by `set_up`, otherwise
    /// never added to or removed from.
    agents: Vec<(K, A)>,

    configured: bool,
    stepped:    bool,
}

impl<K, A: Agent> Sim<K, A> {
    /// An empty driver.  Call [`set_up`][Self::set_up] before running.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            clock:      SimClock::new(),
            agents:     Vec::new(),
            configured: false,
            stepped:    false,
        }
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents with their identities, in set-up (and tick) order.
    pub fn agents(&self) -> impl Iterator<Item = (&K, &A)> {
        self.agents.iter().map(|(id, agent)| (id, agent))
    }

    /// Number of agents currently reporting done.
    pub fn done_count(&self) -> usize {
        self.agents.iter().filter(|(_, a)| a.is_done()).count()
    }

    /// `true` iff every agent reports done.  Vacuously true when there are
    /// no agents.
    ///
    /// Stops at the first agent still running.  Pure: repeated calls with no
    /// step in between always agree.
    pub fn is_done(&self) -> bool {
        self.agents.iter().all(|(_, a)| a.is_done())
    }

    pub fn state(&self) -> SimState {
        if !self.configured {
            SimState::Empty
        } else if self.is_done() {
            SimState::Settled
        } else if self.stepped {
            SimState::Stepping
        } else {
            SimState::Configured
        }
    }

    /// One lockstep step.
    ///
    /// Reports progress when the current tick is due, ticks every agent not
    /// yet done exactly once in set-up order, then advances the clock by one.
    /// The clock advances even when no agent was ticked.
    pub fn tick_all<O: SimObserver>(&mut self, observer: &mut O) -> Result<(), A::Error> {
        let now = self.clock.current_tick;
        if self.config.progress_due(now) {
            observer.on_progress(now);
        }

        let mut advanced = 0;
        for (_, agent) in self.agents.iter_mut() {
            // A finished agent's record is frozen.
            if agent.is_done() {
                continue;
            }
            agent.tick()?;
            advanced += 1;
        }

        self.clock.advance();
        self.stepped = true;
        observer.on_tick_end(now, advanced);
        Ok(())
    }

    /// Advance the clock by `delta` without ticking any agent.
    ///
    /// No-op once every agent is done.  The clock saturates at
    /// [`Tick::MAX`][ms_core::Tick::MAX] rather than wrapping, so a `delta`
    /// that would overflow pins it there.
    pub fn keep_time(&mut self, delta: u64) {
        if !self.is_done() {
            self.clock.advance_by(delta);
        }
    }

    /// Step in lockstep until every agent is done.
    ///
    /// `is_done` is checked before each step, so on return the clock equals
    /// the number of `tick_all` calls this run made (plus wherever it
    /// started), including the step that finished the last agent.
    pub fn run_full_sim<O: SimObserver>(&mut self, observer: &mut O) -> Result<(), A::Error> {
        while !self.is_done() {
            self.tick_all(observer)?;
        }
        observer.on_sim_end(RunMode::Lockstep, self.clock.current_tick);
        Ok(())
    }

    /// Let each agent, in set-up order, run itself to completion.
    ///
    /// The clock is not touched.  Do not mix with
    /// [`run_full_sim`][Self::run_full_sim] on the same agents.
    pub fn run_new_sim<O: SimObserver>(&mut self, observer: &mut O) -> Result<(), A::Error> {
        for (_, agent) in self.agents.iter_mut() {
            agent.run_to_completion()?;
        }
        observer.on_sim_end(RunMode::Delegated, self.clock.current_tick);
        Ok(())
    }
}

impl<K, A> Sim<K, A>
where
    K: Clone + Eq + Hash,
    A: Agent,
{
    /// Build one agent per `(identity, config)` entry and reset the clock.
    ///
    /// Entries keep their iteration order.  A repeated identity behaves like
    /// a map insert: the later config replaces the earlier agent in the
    /// earlier slot.  Any previous population is dropped once every new agent
    /// has been built; if one fails, its error is returned and the driver is
    /// left exactly as it was: previous agents, previous clock.  Nothing is
    /// cleared ahead of the build.
    pub fn set_up<I>(&mut self, data: I) -> Result<(), A::Error>
    where
        I: IntoIterator<Item = (K, A::Config)>,
    {
        let data = data.into_iter();
        let mut agents: Vec<(K, A)> = Vec::with_capacity(data.size_hint().0);
        let mut slots: HashMap<K, usize> = HashMap::new();

        for (id, config) in data {
            let agent = A::set_up(config)?;
            match slots.get(&id) {
                Some(&slot) => agents[slot].1 = agent,
                None => {
                    slots.insert(id.clone(), agents.len());
                    agents.push((id, agent));
                }
            }
        }

        self.agents = agents;
        self.clock.reset();
        self.configured = true;
        self.stepped = false;
        Ok(())
    }

    /// The agent with identity `id`, if any.
    pub fn agent(&self, id: &K) -> Option<&A> {
        self.agents
            .iter()
            .find_map(|(k, a)| (k == id).then_some(a))
    }

    /// Snapshot of every agent's path, keyed by identity.
    ///
    /// One entry per agent.  The map's iteration order is unspecified.
    pub fn all_paths(&self) -> HashMap<K, Vec<A::Position>> {
        self.agents
            .iter()
            .map(|(id, agent)| (id.clone(), agent.path().to_vec()))
            .collect()
    }

    /// Snapshot of every agent's heat data, keyed by identity.
    ///
    /// One entry per agent.  The map's iteration order is unspecified.
    pub fn all_heat_data(&self) -> HashMap<K, A::Heat> {
        self.agents
            .iter()
            .map(|(id, agent)| (id.clone(), agent.heat_data()))
            .collect()
    }
}

impl<K, A: Agent> Default for Sim<K, A> {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
