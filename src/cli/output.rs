//! Console formatting helpers for CLI commands

use crate::{
    learning::StateValues,
    strategy::lookahead_values,
    tictactoe::{Board, Mark},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// One block per legal move: the board with `mark` placed there and the
/// learned value of that position.
pub fn format_state_values(board: &Board, mark: Mark, values: &StateValues) -> String {
    let mut out = String::new();
    for (coord, next, value) in lookahead_values(board, mark, values) {
        out.push_str(&format!("Move {coord} -> {} = {value}\n", next.key()));
        out.push_str(&next.render());
        out.push_str("\n\n");
    }
    out
}

pub fn print_state_values(board: &Board, mark: Mark, values: &StateValues) {
    print!("{}", format_state_values(board, mark, values));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_one_block_per_empty_cell() {
        let board = Board::from_string("OX. ... ...").unwrap();
        let text = format_state_values(&board, Mark::O, &StateValues::default());
        assert_eq!(text.matches("Move ").count(), 7);
        assert!(text.starts_with("Move (0, 2)"));
        assert!(text.contains("= 100"));
    }
}
