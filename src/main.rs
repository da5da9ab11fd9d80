use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use maze_gen::{generate, grid::UNCLAIMED, AgentCount, Maze};

const CELL_W: usize = 2;

#[derive(Parser)]
#[command(name = "maze", about = "Generate a perfect maze on an n x n grid")]
struct Args {
    /// Side length of the square grid
    #[arg(short = 'n', long = "size", default_value_t = 11)]
    size: usize,
    /// Seed for the random carving order
    #[arg(short = 's', long = "seed", default_value_t = 0)]
    seed: u64,
    /// Carve with four concurrent agents, one per corner
    #[arg(short = 'p', long = "parallel")]
    parallel: bool,
    /// Draw colored blocks instead of plain marker characters
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let agents = if args.parallel {
        AgentCount::Four
    } else {
        AgentCount::One
    };
    let maze = generate(args.size, args.seed, agents)?;

    if args.pretty {
        render_pretty(&maze)?;
    } else {
        for line in maze.grid.render() {
            println!("{line}");
        }
    }

    if args.parallel {
        for (agent, count) in maze.counts.iter().enumerate() {
            println!("agent {agent} count: {count}");
        }
    }
    Ok(())
}

fn agent_color(marker: u8) -> Color {
    match marker {
        b'0' => Color::Yellow,
        b'1' => Color::Green,
        b'2' => Color::Magenta,
        b'3' => Color::Cyan,
        _ => Color::Reset,
    }
}

fn render_pretty(maze: &Maze) -> Result<()> {
    let mut stdout = io::stdout();
    let size = maze.grid.size();
    for row in 0..size {
        for col in 0..size {
            let cell = maze.grid.get(row, col);
            let (text, color) = if cell == UNCLAIMED {
                ("██", Color::Blue)
            } else {
                ("· ", agent_color(cell))
            };
            stdout.queue(SetForegroundColor(color))?;
            stdout.queue(Print(text))?;
            let w = UnicodeWidthStr::width(text);
            for _ in 0..CELL_W.saturating_sub(w) {
                stdout.queue(Print(' '))?;
            }
        }
        stdout.queue(ResetColor)?;
        stdout.queue(Print('\n'))?;
    }
    stdout.flush()?;
    Ok(())
}
