use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over a single solve.
///
/// Purely observational: nothing in the engine branches on these values.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// Search frames entered, including the root.
    pub nodes_visited: u64,
    /// Candidate values abandoned after a failed branch.
    pub backtracks: u64,
    /// Arc revisions performed by the propagation loop.
    pub revise_calls: u64,
    /// Total values removed from domains by revision.
    pub values_pruned: u64,
    /// Propagation runs that emptied a domain.
    pub propagation_failures: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 5] = [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Revise calls", stats.revise_calls),
        ("Values pruned", stats.values_pruned),
        ("Propagation failures", stats.propagation_failures),
    ];
    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}
