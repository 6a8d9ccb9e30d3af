// src/report.rs
// Human-readable console summary of a finished card matrix.

use std::fmt::Write as _;

use crate::stats::{PoolSummary, Summary, SummaryRow};

const RULE: &str = "----------------------------------------";

fn pool_lines(out: &mut String, label: &str, pool: &PoolSummary, total: usize) {
    let _ = writeln!(out, "   {label}: {}/{total} decks ({})", pool.count, pool.percent);
    let _ = writeln!(
        out,
        "   Avg: {}, Median: {}, Mode: {} copies",
        pool.avg_copies, pool.median, pool.mode
    );
}

fn card_block(out: &mut String, rank: usize, row: &SummaryRow, total: usize, sideboard_first: bool) {
    let _ = writeln!(out, "{rank}. {}", row.card_name);
    let (first, second) = if sideboard_first {
        (("Sideboard", &row.sideboard), ("Main Deck", &row.main))
    } else {
        (("Main Deck", &row.main), ("Sideboard", &row.sideboard))
    };
    pool_lines(out, first.0, first.1, total);
    if second.1.count > 0 {
        pool_lines(out, second.0, second.1, total);
    }
}

/// Totals, the top `top_main` rows in primary order, and the top
/// `top_sideboard` rows that actually appear in sideboards.
pub fn render(summary: &Summary, top_main: usize, top_sideboard: usize) -> String {
    let total = summary.total_decklists;
    let mut out = s!();

    let _ = writeln!(out, "=== Card Frequency Analysis ===");
    let _ = writeln!(out, "Total unique cards: {}", summary.unique_cards());
    let _ = writeln!(out, "Total decklists analyzed: {total}");

    let _ = writeln!(out, "\nTop {top_main} Most Common Cards in Main Deck:");
    let _ = writeln!(out, "{RULE}");
    for (i, row) in summary.rows.iter().take(top_main).enumerate() {
        card_block(&mut out, i + 1, row, total, false);
    }

    let _ = writeln!(out, "\nTop {top_sideboard} Most Common Sideboard Cards:");
    let _ = writeln!(out, "{RULE}");
    let sideboard_rows = summary
        .by_sideboard()
        .into_iter()
        .filter(|r| r.sideboard.count > 0)
        .take(top_sideboard);
    for (i, row) in sideboard_rows.enumerate() {
        card_block(&mut out, i + 1, row, total, true);
    }

    out
}
