#![cfg(feature = "std")]
//! Terminal rendering and input parsing for the interactive binary.

use crate::board::TriedCell;
use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::game::{GameSnapshot, GameStatus, PlayerCell};
use crate::ship::Orientation;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Parse board notation such as `A5` or `j10` into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    let mut chars = input.chars();
    let letter = match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() => ch.to_ascii_uppercase(),
        Some(ch) => return Err(format!("'{}' is not a column letter (A-J)", ch)),
        None => return Err("Enter a cell such as A5".to_string()),
    };
    let number = chars.as_str();

    let col = usize::from(letter as u8 - b'A');
    let row = number
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=GRID_SIZE).contains(n))
        .ok_or_else(|| format!("'{}' is not a row number (1-10)", number))?;
    Coord::new(row - 1, col).map_err(|_| format!("'{}' is off the board", input))
}

/// Parse a placement command: a coordinate optionally followed by `h` or `v`.
pub fn parse_placement(input: &str, default: Orientation) -> Result<(Coord, Orientation), String> {
    let mut parts = input.split_whitespace();
    let at = parse_coord(parts.next().unwrap_or(""))?;
    let orientation = match parts.next().map(|s| s.to_ascii_lowercase()) {
        None => default,
        Some(s) if s == "h" => Orientation::Horizontal,
        Some(s) if s == "v" => Orientation::Vertical,
        Some(s) => return Err(format!("Unknown orientation '{}' - use h or v", s)),
    };
    Ok((at, orientation))
}

fn player_char(cell: PlayerCell) -> char {
    match cell {
        PlayerCell::Water => '.',
        PlayerCell::Ship => 'S',
        PlayerCell::Hit => 'X',
        PlayerCell::Miss => 'o',
    }
}

fn target_char(cell: TriedCell) -> char {
    match (cell.tried, cell.hit) {
        (true, true) => 'X',
        (true, false) => 'o',
        _ => '.',
    }
}

fn render_grid(title: &str, cell: impl Fn(usize, usize) -> char) -> Vec<String> {
    let mut lines = Vec::with_capacity(GRID_SIZE + 2);
    lines.push(format!("    {:<21}", title));
    let header: String = (0..GRID_SIZE)
        .map(|c| format!(" {}", (b'A' + c as u8) as char))
        .collect();
    lines.push(format!("   {}", header));
    for r in 0..GRID_SIZE {
        let row: String = (0..GRID_SIZE).map(|c| format!(" {}", cell(r, c))).collect();
        lines.push(format!("{:2} {}", r + 1, row));
    }
    lines
}

/// Render both boards side by side with scores and the status line.
pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let left = render_grid("YOUR FLEET", |r, c| player_char(snapshot.player_board[r][c]));
    let right = render_grid("ENEMY WATERS", |r, c| target_char(snapshot.ai_board[r][c]));
    let mut out = String::new();
    for (l, r) in left.iter().zip(right.iter()) {
        out.push_str(&format!("{:<26}    {}\n", l, r));
    }
    out.push_str(&format!(
        "\n    PLAYER: {}    CPU: {}\n",
        snapshot.player_score, snapshot.ai_score
    ));
    if snapshot.status == GameStatus::Setup {
        if let Some(name) = snapshot.next_ship {
            out.push_str(&format!("    DEPLOYING: {}\n", name));
        }
    }
    out.push_str(&format!("    {}\n", snapshot.message));
    out
}

/// Print a weight matrix, such as the AI search heat map.
pub fn render_heat_map(weights: &[[u32; GRID_SIZE]; GRID_SIZE]) -> String {
    let mut out = String::from("\nSearch weights:\n   ");
    for c in 0..GRID_SIZE {
        out.push_str(&format!(" {:>3}", (b'A' + c as u8) as char));
    }
    out.push('\n');
    for (r, row) in weights.iter().enumerate() {
        out.push_str(&format!("{:2} ", r + 1));
        for w in row {
            out.push_str(&format!(" {:>3}", w));
        }
        out.push('\n');
    }
    out
}
