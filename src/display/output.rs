use crate::analysis::aggregator::AggregationResult;
use crate::analysis::category::Category;
use crate::analysis::temporal::peak_minute;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    category: String,
    events: String,
    per_game: String,
    peak_minute: String,
}

#[derive(Tabled)]
struct MinuteRow {
    minute: String,
    deaths: String,
    kills: String,
    assists: String,
    objectives: String,
}

pub fn display_summary(result: &AggregationResult) {
    println!(
        "\n{}",
        format!("🗺️  Year Recap for {} ", result.player_name)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let total_matches = result.summary.total_matches;
    if total_matches == 0 {
        println!(
            "{}",
            "No matches found for this player (nothing to aggregate)".yellow()
        );
        return;
    }

    println!("{} {}\n", "📈 Matches:".bold(), total_matches.to_string().green());

    let rows: Vec<SummaryRow> = Category::ALL
        .iter()
        .map(|&category| {
            let count = result.summary.count(category);
            let peak = peak_minute(result.timeline.get(category))
                .map(|entry| format!("{}' ({})", entry.minute, entry.count))
                .unwrap_or_else(|| "-".to_string());

            SummaryRow {
                category: category.label().to_string(),
                events: count.to_string(),
                per_game: format!("{:.2}", count as f64 / total_matches as f64),
                peak_minute: peak,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_timeline(result: &AggregationResult) {
    let last_minute = Category::ALL
        .iter()
        .filter_map(|&category| result.timeline.get(category).last())
        .map(|entry| entry.minute)
        .max();

    let Some(last_minute) = last_minute else {
        return;
    };

    println!("{}", "⏱️  EVENTS PER MINUTE (average per game)".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let cell = |category: Category, minute: u64| {
        result
            .timeline
            .get(category)
            .get(minute as usize)
            .map(|entry| format!("{:.2}", entry.average_per_match))
            .unwrap_or_else(|| "-".to_string())
    };

    let rows: Vec<MinuteRow> = (0..=last_minute)
        .map(|minute| MinuteRow {
            minute: minute.to_string(),
            deaths: cell(Category::Death, minute),
            kills: cell(Category::Kill, minute),
            assists: cell(Category::Assist, minute),
            objectives: cell(Category::Objective, minute),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}
