use crate::cmd::replay::ReplaySummary;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use std::path::Path;
use strokeforge::error::SfResult;
use strokeforge::scorer::{ScoreDetails, ScoreResult};

fn stars(n: u8) -> String {
    let n = n.min(5) as usize;
    format!("{}{}", "★".repeat(n), "☆".repeat(5 - n))
}

fn star_color(n: u8) -> Color {
    match n {
        5 => Color::Green,
        4 => Color::Cyan,
        3 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn print_score_report(result: &ScoreResult, d: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Stars"),
        Cell::new("Breakdown"),
    ]);

    let c = &result.categories;
    let rows = [
        (
            "Accuracy",
            d.accuracy,
            c.accuracy,
            format!(
                "path {:.3} | box {:.3}",
                d.path_similarity, d.constraint_adherence
            ),
        ),
        (
            "Strokes",
            d.strokes_score,
            c.strokes,
            format!(
                "count {:.3} | length {:.3}",
                d.stroke_count_similarity, d.stroke_length_similarity
            ),
        ),
        (
            "Timing",
            d.timing_score,
            c.timing,
            format!(
                "ratio {:.3} | rhythm {:.3}",
                d.timing_ratio_score, d.timing_pattern_score
            ),
        ),
        (
            "Overall",
            result.total_score as f32 / 100.0,
            c.overall,
            format!("{} / {} points", d.attempt_points, d.example_points),
        ),
    ];

    for (name, score, star_count, breakdown) in rows {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", score)).set_alignment(CellAlignment::Right),
            Cell::new(stars(star_count)).fg(star_color(star_count)),
            Cell::new(breakdown),
        ]);
    }

    println!("\n{}", table);
    println!("Total: {}", result.total_score);
    println!("Feedback: {}", result.feedback);
}

/// One line of the per-attempt progress table.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub attempt: usize,
    pub total: u8,
    pub accuracy: u8,
    pub strokes: u8,
    pub timing: u8,
    pub overall: u8,
    pub path_similarity: f32,
    pub constraint_adherence: f32,
    pub strokes_score: f32,
    pub timing_score: f32,
    pub feedback: String,
}

impl HistoryRow {
    pub fn new(attempt: usize, result: &ScoreResult, d: &ScoreDetails) -> Self {
        Self {
            attempt,
            total: result.total_score,
            accuracy: result.categories.accuracy,
            strokes: result.categories.strokes,
            timing: result.categories.timing,
            overall: result.categories.overall,
            path_similarity: d.path_similarity,
            constraint_adherence: d.constraint_adherence,
            strokes_score: d.strokes_score,
            timing_score: d.timing_score,
            feedback: result.feedback.clone(),
        }
    }
}

pub fn print_history_table(rows: &[HistoryRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Attempt").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Acc"),
        Cell::new("Strk"),
        Cell::new("Time"),
        Cell::new("Overall").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let best = rows.iter().map(|r| r.total).max().unwrap_or(0);
    for r in rows {
        let total_cell = Cell::new(r.total).fg(Color::Cyan);
        let total_cell = if r.total == best {
            total_cell.add_attribute(Attribute::Bold)
        } else {
            total_cell
        };
        table.add_row(vec![
            Cell::new(format!("#{}", r.attempt)).add_attribute(Attribute::Bold),
            total_cell,
            Cell::new(r.accuracy),
            Cell::new(r.strokes),
            Cell::new(r.timing),
            Cell::new(stars(r.overall)).fg(star_color(r.overall)),
        ]);
    }
    println!("\n{}", table);
}

pub fn write_history_csv<P: AsRef<Path>>(path: P, rows: &[HistoryRow]) -> SfResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_replay_summary(s: &ReplaySummary) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Frames").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Strokes"),
        Cell::new("Sim ms"),
        Cell::new("Done"),
    ]);
    table.add_row(vec![
        Cell::new(s.frames),
        Cell::new(s.points),
        Cell::new(s.strokes),
        Cell::new(s.simulated_ms),
        Cell::new(if s.finished { "yes" } else { "no" }).fg(if s.finished {
            Color::Green
        } else {
            Color::Red
        }),
    ]);
    println!("\n{}", table);
}
