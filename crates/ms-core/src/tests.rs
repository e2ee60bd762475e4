//! Unit tests for ms-core primitives.

#[cfg(test)]
mod ids {
    use crate::MouseId;

    #[test]
    fn ordering() {
        assert!(MouseId(0) < MouseId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(MouseId::INVALID.0, u32::MAX);
        assert_eq!(MouseId::default(), MouseId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(MouseId(7).to_string(), "MouseId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Direction, Grid, MsError};

    const MAZE: &str = "\
#####
#...#
#.#.#
#...#
#####
";

    #[test]
    fn parse_dimensions() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 25);
    }

    #[test]
    fn parse_walls_and_open() {
        let g = Grid::parse(MAZE).unwrap();
        assert!(!g.is_open(Cell::new(0, 0)));
        assert!(g.is_open(Cell::new(1, 1)));
        assert!(!g.is_open(Cell::new(2, 2)));
        assert!(!g.is_open(Cell::new(9, 9)), "out of bounds is never open");
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::parse("###\n##\n").unwrap_err();
        assert!(matches!(err, MsError::Parse(_)));
    }

    #[test]
    fn empty_text_rejected() {
        assert!(Grid::parse("\n\n").is_err());
    }

    #[test]
    fn index_roundtrip() {
        let g = Grid::open(4, 3);
        let c = Cell::new(3, 2);
        let i = g.index(c).unwrap();
        assert_eq!(i, 11);
        assert_eq!(g.index(Cell::new(4, 0)), None);
    }

    #[test]
    fn step_stops_at_origin() {
        assert_eq!(Cell::new(0, 0).step(Direction::North), None);
        assert_eq!(Cell::new(0, 0).step(Direction::West), None);
        assert_eq!(Cell::new(0, 0).step(Direction::East), Some(Cell::new(1, 0)));
        assert_eq!(Cell::new(0, 0).step(Direction::South), Some(Cell::new(0, 1)));
    }

    #[test]
    fn turns_compose() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_left(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::North.turn_left(), Direction::West);
    }

    #[test]
    fn open_neighbours_skip_walls() {
        let g = Grid::parse(MAZE).unwrap();
        let n: Vec<_> = g.open_neighbours(Cell::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![(Direction::East, Cell::new(2, 1)), (Direction::South, Cell::new(1, 2))]
        );
    }

    #[test]
    fn check_open_reports_reason() {
        let g = Grid::parse(MAZE).unwrap();
        assert!(g.check_open(Cell::new(1, 1)).is_ok());
        assert!(matches!(g.check_open(Cell::new(0, 0)), Err(MsError::Blocked(_))));
        assert!(matches!(g.check_open(Cell::new(5, 1)), Err(MsError::OutOfBounds(_))));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_saturates_instead_of_wrapping() {
        let mut clock = SimClock::new();
        clock.advance_by(u64::MAX - 1);
        clock.advance();
        assert_eq!(clock.current_tick, Tick::MAX);
        clock.advance();
        clock.advance_by(10);
        assert_eq!(clock.current_tick, Tick::MAX);
        assert_eq!(Tick(5) + u64::MAX, Tick::MAX);
    }

    #[test]
    fn clock_advance_and_reset() {
        let mut clock = SimClock::new();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        clock.advance_by(40);
        assert_eq!(clock.current_tick, Tick(42));
        clock.reset();
        assert_eq!(clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn progress_due_includes_zero() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.progress_interval_ticks, 100_000);
        assert!(cfg.progress_due(Tick(0)));
        assert!(!cfg.progress_due(Tick(1)));
        assert!(cfg.progress_due(Tick(200_000)));
    }

    #[test]
    fn zero_interval_disables_progress() {
        let cfg = SimConfig { seed: 1, progress_interval_ticks: 0 };
        assert!(!cfg.progress_due(Tick(0)));
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new();
        clock.advance_by(7);
        assert_eq!(clock.to_string(), "T7");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, MouseId, agent_seed};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, MouseId(0));
        let mut r2 = AgentRng::new(12345, MouseId(0));
        let items: Vec<u32> = (0..64).collect();
        for _ in 0..100 {
            assert_eq!(r1.choose(&items), r2.choose(&items));
        }
    }

    #[test]
    fn different_mice_differ() {
        let mut r0 = AgentRng::new(1, MouseId(0));
        let mut r1 = AgentRng::new(1, MouseId(1));
        assert_ne!(
            agent_seed(1, MouseId(0)),
            agent_seed(1, MouseId(1)),
            "seeds for adjacent mice should diverge"
        );
        let items: Vec<u32> = (0..1024).collect();
        let a: Vec<u32> = (0..8).filter_map(|_| r0.choose(&items).copied()).collect();
        let b: Vec<u32> = (0..8).filter_map(|_| r1.choose(&items).copied()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn new_matches_from_seed() {
        let mut a = AgentRng::new(99, MouseId(3));
        let mut b = AgentRng::from_seed(agent_seed(99, MouseId(3)));
        let items: Vec<u32> = (0..1024).collect();
        for _ in 0..16 {
            assert_eq!(a.choose(&items), b.choose(&items));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::from_seed(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}
