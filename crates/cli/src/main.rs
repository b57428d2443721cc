//! PrepTrack CLI - career-preparation progress tracking.

use anyhow::Result;
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};
use preptrack_core::{Difficulty, GoalCategory, GoalId, UserId};
use preptrack_progress::{
    GoalPatch, NewGoal, ProgressAggregator, RoadmapUpdate, SolveEvent, TopicCompletion,
};
use preptrack_storage::JsonStorage;
use tracing::Level;

#[derive(Parser)]
#[command(name = "preptrack")]
#[command(about = "Career-preparation progress tracker", long_about = None)]
struct Cli {
    /// User id (ULID)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full progress dashboard
    Dashboard,
    /// Record a solved DSA problem
    Solve {
        /// Problem id
        problem_id: String,
        /// Difficulty: easy, medium, or hard
        #[arg(long)]
        difficulty: String,
        /// Minutes spent (defaults to 30)
        #[arg(long)]
        time: Option<u32>,
        /// Attempts before solving (defaults to 1)
        #[arg(long)]
        attempts: Option<u32>,
    },
    /// Update roadmap progress
    Roadmap {
        /// Roadmap id
        roadmap_id: String,
        /// Roadmap title
        #[arg(long)]
        title: String,
        /// Topic id to mark complete
        #[arg(long)]
        topic: Option<String>,
        /// Topic title (required with --topic)
        #[arg(long)]
        topic_title: Option<String>,
        /// Completion percentage override, 0-100
        #[arg(long)]
        percent: Option<f64>,
    },
    /// Manage learning goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Show the weekly report
    Report,
}

#[derive(Subcommand)]
enum GoalCommands {
    /// Add a goal
    Add {
        /// Goal title
        title: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Target date, YYYY-MM-DD
        #[arg(long)]
        target_date: String,
        /// Category: dsa, roadmap, career, or custom
        #[arg(long, default_value = "custom")]
        category: String,
        /// Target value, e.g. problem count
        #[arg(long)]
        target_value: f64,
    },
    /// Update a goal
    Update {
        /// Goal id
        id: String,
        /// New current value
        #[arg(long)]
        value: Option<f64>,
        /// Mark completed
        #[arg(long)]
        completed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let user: UserId = cli
        .user
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--user is required"))?
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid user ID"))?;

    let storage = JsonStorage::new(".preptrack").await?;
    let mut aggregator = ProgressAggregator::new(storage);

    match cli.command {
        Commands::Dashboard => {
            let dashboard = aggregator.dashboard(user).await?;
            println!("Overall progress: {}%", dashboard.overall_progress);
            println!(
                "DSA: {} solved ({} easy / {} medium / {} hard)",
                dashboard.dsa_progress.total_solved,
                dashboard.dsa_progress.easy_count,
                dashboard.dsa_progress.medium_count,
                dashboard.dsa_progress.hard_count,
            );
            println!(
                "Streak: {} days (best {})",
                dashboard.dsa_progress.current_streak, dashboard.dsa_progress.max_streak,
            );
            println!("Roadmaps ({})", dashboard.roadmap_progress.len());
            for roadmap in &dashboard.roadmap_progress {
                println!(
                    "  {} | {:.0}% | {} topics",
                    roadmap.roadmap_title,
                    roadmap.progress_percentage,
                    roadmap.completed_topics.len(),
                );
            }
            println!(
                "Study time: {} min total, {} min this week",
                dashboard.study_stats.total_study_time_minutes,
                dashboard.study_stats.weekly_study_time_minutes,
            );
            println!("Achievements ({})", dashboard.achievements.len());
            for badge in &dashboard.achievements {
                println!("  {} - {}", badge.title, badge.description);
            }
        }
        Commands::Solve {
            problem_id,
            difficulty,
            time,
            attempts,
        } => {
            let difficulty: Difficulty = difficulty
                .parse()
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            let dsa = aggregator
                .record_problem_solved(
                    user,
                    SolveEvent {
                        problem_id: problem_id.clone(),
                        difficulty,
                        time_spent_minutes: time,
                        attempts,
                    },
                )
                .await?;
            println!(
                "Recorded {} ({}) | total solved: {} | streak: {}",
                problem_id, difficulty, dsa.total_solved, dsa.current_streak,
            );
        }
        Commands::Roadmap {
            roadmap_id,
            title,
            topic,
            topic_title,
            percent,
        } => {
            let topic = match (topic, topic_title) {
                (Some(topic_id), Some(topic_title)) => Some(TopicCompletion {
                    topic_id,
                    topic_title,
                }),
                (None, _) => None,
                (Some(_), None) => {
                    anyhow::bail!("--topic requires --topic-title");
                }
            };
            let entry = aggregator
                .update_roadmap_progress(
                    user,
                    RoadmapUpdate {
                        roadmap_id,
                        roadmap_title: title,
                        topic,
                        progress_percentage: percent,
                    },
                )
                .await?;
            println!(
                "{} | {:.0}% | {} topics completed",
                entry.roadmap_title,
                entry.progress_percentage,
                entry.completed_topics.len(),
            );
        }
        Commands::Goal { command } => match command {
            GoalCommands::Add {
                title,
                description,
                target_date,
                category,
                target_value,
            } => {
                let date = chrono::NaiveDate::parse_from_str(&target_date, "%Y-%m-%d")
                    .map_err(|_| anyhow::anyhow!("Invalid target date, expected YYYY-MM-DD"))?;
                let midnight = date
                    .and_hms_opt(0, 0, 0)
                    .ok_or_else(|| anyhow::anyhow!("Invalid target date"))?;
                let target_date = Utc.from_utc_datetime(&midnight);
                let category = parse_category(&category)
                    .ok_or_else(|| anyhow::anyhow!("Unknown category: {category}"))?;

                let goal = aggregator
                    .add_goal(
                        user,
                        NewGoal {
                            title,
                            description,
                            target_date,
                            category,
                            target_value,
                        },
                    )
                    .await?;
                println!("Added goal: {} - {}", goal.id, goal.title);
            }
            GoalCommands::Update {
                id,
                value,
                completed,
            } => {
                let goal_id: GoalId = id
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid goal ID"))?;
                let goal = aggregator
                    .update_goal(
                        user,
                        goal_id,
                        GoalPatch {
                            current_value: value,
                            is_completed: completed.then_some(true),
                        },
                    )
                    .await?;
                println!(
                    "Goal: {} | {}/{} | {}",
                    goal.title,
                    goal.current_value,
                    goal.target_value,
                    if goal.is_completed { "completed" } else { "in progress" },
                );
            }
        },
        Commands::Report => {
            let report = aggregator.weekly_report(user).await?;
            println!("This week:");
            println!("  Problems solved: {}", report.problems_solved);
            println!("  Study hours: {:.1}", report.study_hours);
            println!("  Topics completed: {}", report.topics_completed);
            println!("  Goals achieved: {}", report.goals_achieved);
            println!("  Current streak: {} days", report.current_streak);
            println!("  Sessions: {}", report.study_sessions.len());
        }
    }

    Ok(())
}

fn parse_category(s: &str) -> Option<GoalCategory> {
    match s.to_ascii_lowercase().as_str() {
        "dsa" => Some(GoalCategory::Dsa),
        "roadmap" => Some(GoalCategory::Roadmap),
        "career" => Some(GoalCategory::Career),
        "custom" => Some(GoalCategory::Custom),
        _ => None,
    }
}
