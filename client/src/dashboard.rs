use std::fmt::Write;
use tictactoe_common::history::MatchHistory;

const RECENT_MATCHES: usize = 5;

pub fn render_dashboard(history: &MatchHistory, x_label: &str, o_label: &str) -> String {
    let stats = history.stats();
    let mut out = String::new();

    let _ = writeln!(out, "Total matches: {}", stats.total);
    let _ = writeln!(out, "{} Wins: {} ({}%)", x_label, stats.x_wins, stats.x_rate);
    let _ = writeln!(out, "{} Wins: {} ({}%)", o_label, stats.o_wins, stats.o_rate);
    let _ = writeln!(out, "Draws: {}", stats.draws);
    let _ = writeln!(out);

    if history.is_empty() {
        let _ = writeln!(out, "No matches played yet.");
        return out;
    }

    let _ = writeln!(out, "Recent matches:");
    for game in history.recent(RECENT_MATCHES) {
        let _ = writeln!(
            out,
            "  {:<28} {:<14} {}",
            game.title(),
            game.formatted_date(),
            game.winner.badge()
        );
    }
    out
}
