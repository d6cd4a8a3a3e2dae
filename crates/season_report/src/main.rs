//! Season Report CLI
//!
//! Runs the stat engine over exported record/goal JSON files, the same way
//! the app's refresh flow does: load, filter by context, sort newest-first,
//! aggregate, recompute goal progress, select the insight card.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use lax_core::{Context, Level, Position};

#[derive(Parser)]
#[command(name = "season_report")]
#[command(about = "Inspect season aggregates, goal progress, and insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PositionArg {
    Goalie,
    Attack,
    Midfield,
    Defense,
    Faceoff,
    Lsm,
}

impl From<PositionArg> for Position {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Goalie => Position::Goalie,
            PositionArg::Attack => Position::Attack,
            PositionArg::Midfield => Position::Midfield,
            PositionArg::Defense => Position::Defense,
            PositionArg::Faceoff => Position::Faceoff,
            PositionArg::Lsm => Position::Lsm,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ContextArg {
    Primary,
    Secondary,
}

impl From<ContextArg> for Context {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Primary => Context::Primary,
            ContextArg::Secondary => Context::Secondary,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Freshman,
    Jv,
    Varsity,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Freshman => Level::Freshman,
            LevelArg::Jv => Level::JuniorVarsity,
            LevelArg::Varsity => Level::Varsity,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full season report: metrics, trends, goal progress, insight card
    Report {
        /// Stat records JSON file (array of record documents)
        #[arg(long)]
        records: PathBuf,

        /// Season goals JSON file (array of goal documents)
        #[arg(long)]
        goals: Option<PathBuf>,

        /// Athlete position
        #[arg(long)]
        position: PositionArg,

        /// Competition context to report on
        #[arg(long, value_enum, default_value = "primary")]
        context: ContextArg,

        /// Report date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Emit the report as JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Run the validation engine over every record and print warnings
    Validate {
        /// Stat records JSON file
        #[arg(long)]
        records: PathBuf,

        /// Athlete position
        #[arg(long)]
        position: PositionArg,
    },

    /// Dump the authored goal templates for a position and level
    Catalog {
        /// Athlete position
        #[arg(long)]
        position: PositionArg,

        /// Team level
        #[arg(long)]
        level: LevelArg,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { records, goals, position, context, as_of, json } => {
            let position = Position::from(position);
            let context = Context::from(context);
            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

            let loaded = season_report::load_records(&records)?;
            let goals = match goals {
                Some(path) => season_report::load_goals(&path)?,
                None => Vec::new(),
            };
            let prepared = season_report::prepare_records(loaded, context);
            let report =
                season_report::build_report(&prepared, &goals, position, context, as_of);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        Commands::Validate { records, position } => {
            let loaded = season_report::load_records(&records)?;
            let flagged = season_report::validate_records(&loaded, Position::from(position));
            if flagged.is_empty() {
                println!("All {} records passed validation.", loaded.len());
            } else {
                for (id, warnings) in &flagged {
                    println!("record {}:", id);
                    for warning in warnings {
                        println!("  - {}", warning);
                    }
                }
                println!("\n{} of {} records have warnings.", flagged.len(), loaded.len());
            }
        }

        Commands::Catalog { position, level } => {
            let templates = lax_core::lookup(Position::from(position), Level::from(level));
            println!("{}", serde_json::to_string_pretty(templates)?);
        }
    }

    Ok(())
}

fn print_report(report: &season_report::SeasonReport) {
    println!("Season report: {} games ({:?} context)\n", report.games, report.context);

    println!("{:<18} {:>10} {:>10} {:>10}", "metric", "total", "per game", "trend");
    for row in &report.metrics {
        let arrow = match row.trend {
            Some(t) => match t.direction {
                lax_core::TrendDirection::Up => format!("up {:+.1}%", t.percent_change),
                lax_core::TrendDirection::Down => format!("down {:+.1}%", t.percent_change),
                lax_core::TrendDirection::Stable => "stable".to_string(),
            },
            None => "n/a".to_string(),
        };
        let per_game = match row.per_game {
            Some(rate) => format!("{:.2}", rate),
            None => "-".to_string(),
        };
        println!("{:<18} {:>10.2} {:>10} {:>10}", row.key, row.total, per_game, arrow);
    }

    if !report.goals.is_empty() {
        println!("\nGoals:");
        for goal in &report.goals {
            println!(
                "  [{:>3}%] {:<40} {:>8.1} / {:<8.1} {}",
                goal.progress_percent, goal.title, goal.current, goal.target, goal.status
            );
        }
    }

    match &report.insight {
        Some(card) => {
            println!("\nInsight ({:?}):", card.state);
            println!("  {}", card.insight);
            println!("  Next: {}", card.next_action);
        }
        None => println!("\nInsight: hidden (no games logged)"),
    }
}
