//! Terminal projection of a [`ListSnapshot`].

use std::fmt::Write as _;
use tasklist_core::ListSnapshot;

/// Renders visible rows followed by the items-left counter.
pub fn render_list(snapshot: &ListSnapshot) -> String {
    let mut out = String::new();
    for row in snapshot.visible_rows() {
        let mark = if row.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {} {}", row.id, row.text);
    }
    let hidden = snapshot.rows.len() - snapshot.visible_rows().count();
    if hidden > 0 {
        let _ = writeln!(
            out,
            "({hidden} hidden by filter={} search={:?})",
            snapshot.status, snapshot.search
        );
    }
    out.push_str(&snapshot.items_left_label());
    out
}
