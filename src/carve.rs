use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;

pub const NUM_AGENTS: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

const DIRS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

/// Destination two cells away in `dir` plus the midpoint one cell away.
/// None when the destination would leave the grid on the low side.
fn two_step(row: usize, col: usize, dir: Dir) -> Option<((usize, usize), (usize, usize))> {
    let (dr, dc) = dir.delta();
    let dest_r = row as isize + 2 * dr;
    let dest_c = col as isize + 2 * dc;
    if dest_r < 0 || dest_c < 0 {
        return None;
    }
    let mid = ((row as isize + dr) as usize, (col as isize + dc) as usize);
    Some(((dest_r as usize, dest_c as usize), mid))
}

/// Fixed starting corner for each agent id.
pub fn start_cell(agent: usize, size: usize) -> (usize, usize) {
    let hi = size - 2;
    [(1, 1), (1, hi), (hi, 1), (hi, hi)][agent]
}

/// The digit character an agent writes into cells it claims.
pub fn marker(agent: usize) -> u8 {
    b'0' + agent as u8
}

/// Randomized depth-first backtracker for one agent. Runs until the
/// visitation stack empties and returns how many cells the agent claimed
/// by stepping (the start cell is not counted).
///
/// Each step moves two cells and claims the midpoint as well, leaving a
/// one-cell wall between parallel corridors. Destinations outside the
/// interior or already claimed are skipped silently; that is how agents
/// stay off the border and out of each other's finished territory.
pub fn carve(grid: &Grid, agent: usize, rng: &mut impl Rng) -> usize {
    let (row, col) = start_cell(agent, grid.size());
    let mark = marker(agent);
    grid.set(row, col, mark);

    let mut stack = vec![(row, col)];
    let mut count = 0;
    let mut dirs = DIRS;

    while let Some(&(row, col)) = stack.last() {
        // Uniform random attempt order, fresh per visit to a cell.
        dirs.shuffle(rng);
        let mut advanced = false;
        for dir in dirs {
            let Some(((dest_r, dest_c), (mid_r, mid_c))) = two_step(row, col, dir) else {
                continue;
            };
            if !grid.in_bounds(dest_r, dest_c) {
                continue;
            }
            if grid.try_claim(dest_r, dest_c, mark) {
                grid.set(mid_r, mid_c, mark);
                stack.push((dest_r, dest_c));
                count += 1;
                advanced = true;
                break;
            }
        }
        if !advanced {
            // Cell exhausted: backtrack.
            stack.pop();
        }
    }
    count
}
