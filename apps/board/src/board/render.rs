//! Plain-text rendering of a `BoardView` for the terminal.
//!
//! Numbers in brackets are the click targets used by the session commands:
//! `[2.3]` is chip 3 of card 2, `[1 ✕]` removes the first active filter.

use std::fmt::Write;

use crate::board::view::{BoardView, CardView, FilterBarView};

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn render(view: &BoardView<'_>) -> String {
    let mut out = String::new();

    if let Some(bar) = &view.filter_bar {
        render_filter_bar(&mut out, bar);
    }

    if view.cards.is_empty() {
        out.push_str("No jobs match the active filters.\n");
        return out;
    }

    for (i, card) in view.cards.iter().enumerate() {
        render_card(&mut out, i + 1, card);
    }
    out
}

fn render_filter_bar(out: &mut String, bar: &FilterBarView<'_>) {
    let chips: Vec<String> = bar
        .chips
        .iter()
        .enumerate()
        .map(|(i, tag)| format!("{tag} [{} ✕]", i + 1))
        .collect();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Filters: {}    (clear)", chips.join("  "));
    let _ = writeln!(out, "{RULE}");
}

fn render_card(out: &mut String, n: usize, card: &CardView<'_>) {
    let job = card.job;
    let accent = if job.featured { "▌" } else { " " };

    let mut header = format!("{accent} #{n} {}", job.company);
    if job.new {
        header.push_str("  NEW!");
    }
    if job.featured {
        header.push_str("  FEATURED");
    }

    let tags: Vec<String> = if card.tags_clickable {
        card.tags
            .iter()
            .enumerate()
            .map(|(i, tag)| format!("[{n}.{}] {tag}", i + 1))
            .collect()
    } else {
        card.tags.iter().map(|tag| tag.to_string()).collect()
    };
    let separator = if card.tags_clickable { "  " } else { " · " };

    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{accent}   {}", job.position);
    let _ = writeln!(
        out,
        "{accent}   {} • {} • {}",
        job.posted_at, job.contract, job.location
    );
    let _ = writeln!(out, "{accent}   logo: {}", card.logo_url);
    let _ = writeln!(out, "{accent}   {}", tags.join(separator));
    out.push('\n');
}
