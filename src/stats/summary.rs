// src/stats/summary.rs
use std::cmp::Ordering;
use std::io::{self, Write};

use super::tally::PoolTally;
use crate::csv::{Cell, write_row};

pub const CSV_HEADERS: [&str; 11] = [
    "Card Name",
    "Main Deck Count",
    "Main Deck %",
    "Main Deck Avg Copies",
    "Main Deck Median",
    "Main Deck Mode",
    "Sideboard Count",
    "Sideboard %",
    "Sideboard Avg Copies",
    "Sideboard Median",
    "Sideboard Mode",
];

/// Two decimals, rounded from the stored binary value (`43.0 / 40.0` is just
/// below 1.075 and gives `"1.07"`). Exact halves round up (`1.125` -> `"1.13"`).
pub fn fixed2(x: f64) -> String {
    // Only odd multiples of 1/8 sit exactly on a hundredths midpoint; `{:.2}`
    // would send those to the even neighbour.
    let eighths = x * 8.0;
    if x >= 0.0 && eighths < 1e15 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (eighths as u64 * 25 + 1) / 2;
        return format!("{}.{:02}", cents / 100, cents % 100);
    }
    format!("{x:.2}")
}

/// Display-ready statistics for one pool of one card.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolSummary {
    pub count: u32,
    pub percent: String,
    pub total_copies: u64,
    pub avg_copies: String,
    pub median: String,
    pub mode: String,
}

impl PoolSummary {
    pub fn from_tally(tally: &PoolTally, total_decklists: usize) -> Self {
        let ratio = if total_decklists == 0 {
            0.0
        } else {
            f64::from(tally.inclusions) / total_decklists as f64
        };
        Self {
            count: tally.inclusions,
            percent: join!(fixed2(ratio * 100.0), "%"),
            total_copies: tally.total_copies,
            avg_copies: fixed2(tally.average()),
            median: fixed2(tally.median()),
            mode: tally.mode().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub card_name: String,
    pub main: PoolSummary,
    pub sideboard: PoolSummary,
}

impl SummaryRow {
    fn cells(&self) -> Vec<Cell<'_>> {
        let m = &self.main;
        let sb = &self.sideboard;
        vec![
            Cell::quoted(&self.card_name),
            Cell::plain(m.count.to_string()),
            Cell::plain(&m.percent),
            Cell::plain(&m.avg_copies),
            Cell::plain(&m.median),
            Cell::plain(&m.mode),
            Cell::plain(sb.count.to_string()),
            Cell::plain(&sb.percent),
            Cell::plain(&sb.avg_copies),
            Cell::plain(&sb.median),
            Cell::plain(&sb.mode),
        ]
    }
}

/// Main-deck inclusion desc, then sideboard inclusion desc. Stable.
pub fn sort_primary(rows: &mut [SummaryRow]) {
    rows.sort_by(|a, b| {
        b.main
            .count
            .cmp(&a.main.count)
            .then_with(|| b.sideboard.count.cmp(&a.sideboard.count))
    });
}

fn by_sideboard_desc(a: &SummaryRow, b: &SummaryRow) -> Ordering {
    b.sideboard.count.cmp(&a.sideboard.count)
}

/// Finalized card matrix, rows in primary order.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub total_decklists: usize,
}

impl Summary {
    pub fn unique_cards(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, card_name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.card_name == card_name)
    }

    /// Same rows re-sorted by sideboard inclusion (display only).
    pub fn by_sideboard(&self) -> Vec<&SummaryRow> {
        let mut view: Vec<&SummaryRow> = self.rows.iter().collect();
        view.sort_by(|a, b| by_sideboard_desc(a, b));
        view
    }

    /// Header row, then one row per card in primary order.
    pub fn write_csv<W: Write>(&self, mut w: W) -> io::Result<()> {
        let headers: Vec<Cell> = CSV_HEADERS.iter().map(|h| Cell::plain(*h)).collect();
        write_row(&mut w, &headers, ',')?;
        for row in &self.rows {
            write_row(&mut w, &row.cells(), ',')?;
        }
        w.flush()
    }

    pub fn to_csv(&self) -> io::Result<String> {
        let mut buf: Vec<u8> = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_rounds_half_up() {
        assert_eq!(fixed2(1.125), "1.13");
        assert_eq!(fixed2(0.375), "0.38");
        assert_eq!(fixed2(2.625), "2.63");
        assert_eq!(fixed2(2.0), "2.00");
        assert_eq!(fixed2(100.0 / 3.0), "33.33");
        assert_eq!(fixed2(0.0), "0.00");
    }

    #[test]
    fn fixed2_rounds_stored_value() {
        // 1.075, 1.005 and 0.285 are all stored slightly below the midpoint.
        assert_eq!(fixed2(43.0 / 40.0), "1.07");
        assert_eq!(fixed2(1.005), "1.00");
        assert_eq!(fixed2(0.285), "0.28");
        assert_eq!(fixed2(2.675), "2.67");
        assert_eq!(fixed2(1.0 / 3.0 * 100.0), "33.33");
        assert_eq!(fixed2(200.0 / 3.0), "66.67");
    }

    #[test]
    fn csv_rows_end_with_newline() {
        let summary = Summary { rows: Vec::new(), total_decklists: 0 };
        let csv = summary.to_csv().unwrap();
        assert!(csv.starts_with("Card Name,"));
        assert!(csv.ends_with("Sideboard Mode\n"));
    }

    #[test]
    fn empty_tally_summary() {
        let s = PoolSummary::from_tally(&PoolTally::default(), 4);
        assert_eq!(s.count, 0);
        assert_eq!(s.percent, "0.00%");
        assert_eq!(s.avg_copies, "0.00");
        assert_eq!(s.median, "0.00");
        assert_eq!(s.mode, "0");
    }
}
