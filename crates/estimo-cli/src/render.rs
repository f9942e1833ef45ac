//! Tabular renderer for revealed votes.
//!
//! `vote_rows` is pure so the grouping rules stay unit-testable;
//! `render_rows` handles column alignment and printing.

use std::collections::{BTreeMap, HashMap};

use estimo_core::protocol::events::Vote;

const COLUMNS: usize = 3;

/// Build display rows from the member -> vote map.
///
/// Groups are ordered by ascending vote-value string, members inside
/// a group by member id so the table is deterministic. The first row
/// of a group carries the value and the group's member count, later
/// rows only the member name, and each group is followed by a blank
/// separator row.
pub fn vote_rows(votes: &HashMap<String, Vote>) -> Vec<[String; COLUMNS]> {
    let mut groups: BTreeMap<&str, Vec<&Vote>> = BTreeMap::new();
    for vote in votes.values() {
        groups.entry(vote.value.as_str()).or_default().push(vote);
    }

    let mut rows = Vec::new();
    for (value, mut members) in groups {
        members.sort_by(|a, b| a.member_id.cmp(&b.member_id));
        for (i, member) in members.iter().enumerate() {
            if i == 0 {
                rows.push([
                    value.to_string(),
                    member.member_name.clone(),
                    members.len().to_string(),
                ]);
            } else {
                rows.push([String::new(), member.member_name.clone(), String::new()]);
            }
        }
        rows.push([String::new(), String::new(), String::new()]);
    }
    rows
}

/// Print a column-aligned table. A row of empty cells renders as a
/// blank separator line.
pub fn render_rows(header: [&str; COLUMNS], rows: &[[String; COLUMNS]]) {
    let mut widths = [0usize; COLUMNS];
    for (i, cell) in header.iter().enumerate() {
        widths[i] = cell.len();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let line = |cells: [&str; COLUMNS]| {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&format!("{cell:<width$}  ", width = widths[i]));
        }
        println!("{}", out.trim_end());
    };

    line(header);
    for row in rows {
        line([row[0].as_str(), row[1].as_str(), row[2].as_str()]);
    }
}
