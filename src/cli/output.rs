//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for a series of games
pub fn create_match_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

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

/// Render a board with row and column indices for interactive play
pub fn render_grid(grid: &crate::board::Grid, highlight: Option<&[usize]>) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for column in 0..grid.columns() {
        out.push_str(&format!("{column} "));
    }
    out.push('\n');
    for row in 0..grid.rows() {
        out.push_str(&format!("{row}  "));
        for column in 0..grid.columns() {
            let pos = grid.index(row, column);
            let mut c = grid.cell(pos).to_char();
            if highlight.is_some_and(|cells| cells.contains(&pos)) {
                c = c.to_ascii_lowercase();
            }
            out.push(c);
            out.push(' ');
        }
        if row + 1 < grid.rows() {
            out.push('\n');
        }
    }
    out
}
