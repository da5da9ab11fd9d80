//! Perfect-maze generator: randomized depth-first carving over a shared
//! n×n character grid, optionally split across four concurrent agents that
//! each start from one corner of the interior and carve until their
//! backtracking stacks empty.

use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

pub mod carve;
pub mod grid;

pub use carve::{carve, marker, start_cell, NUM_AGENTS};
pub use grid::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AgentCount {
    One,
    Four,
}

impl AgentCount {
    pub fn agents(self) -> usize {
        match self {
            AgentCount::One => 1,
            AgentCount::Four => NUM_AGENTS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is too small; need at least 3 to have an interior")]
    SizeTooSmall { size: usize },
    #[error("grid size {size} is too small for four agents; need at least 4")]
    SizeTooSmallForAgents { size: usize },
}

/// A finished maze: the carved grid plus how many cells each agent claimed
/// by stepping (diagnostics only).
pub struct Maze {
    pub grid: Grid,
    pub counts: Vec<usize>,
}

/// Generate a maze. Single-agent output is a pure function of
/// `(size, seed)`; with four agents each gets its own seeded rng, so the
/// result is deterministic only up to thread interleaving — contested
/// cells go to whichever agent claims them first.
pub fn generate(size: usize, seed: u64, agents: AgentCount) -> Result<Maze, ConfigError> {
    if size < 3 {
        return Err(ConfigError::SizeTooSmall { size });
    }
    if agents == AgentCount::Four && size < 4 {
        return Err(ConfigError::SizeTooSmallForAgents { size });
    }

    let grid = Grid::new(size);
    let counts = match agents {
        AgentCount::One => {
            let mut rng = StdRng::seed_from_u64(seed);
            vec![carve(&grid, 0, &mut rng)]
        }
        AgentCount::Four => thread::scope(|scope| {
            let workers: Vec<_> = (0..NUM_AGENTS)
                .map(|agent| {
                    let grid = &grid;
                    scope.spawn(move || {
                        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(agent as u64));
                        carve(grid, agent, &mut rng)
                    })
                })
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().expect("carving agent panicked"))
                .collect()
        }),
    };

    Ok(Maze { grid, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_sizes_without_an_interior() {
        assert!(matches!(
            generate(2, 0, AgentCount::One),
            Err(ConfigError::SizeTooSmall { size: 2 })
        ));
        assert!(matches!(
            generate(0, 0, AgentCount::One),
            Err(ConfigError::SizeTooSmall { size: 0 })
        ));
    }

    #[test]
    fn rejects_four_agents_on_a_size_three_grid() {
        assert!(matches!(
            generate(3, 0, AgentCount::Four),
            Err(ConfigError::SizeTooSmallForAgents { size: 3 })
        ));
    }

    #[test]
    fn single_agent_reports_one_count() {
        let maze = generate(7, 5, AgentCount::One).unwrap();
        assert_eq!(maze.counts.len(), 1);
    }

    #[test]
    fn four_agents_report_four_counts() {
        let maze = generate(11, 5, AgentCount::Four).unwrap();
        assert_eq!(maze.counts.len(), 4);
    }
}
