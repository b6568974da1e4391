//! Sensei CLI - study roadmaps and student profiles for Japanese tutors.

mod config;
mod render;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use sensei_core::{Locale, Purpose, Student, StudentId};
use sensei_roadmap::{estimate_months, EngineConfig, PlanSummary, RoadmapEngine, RoadmapRequest};
use sensei_storage::{JsonProfileStore, ProfileStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "sensei")]
#[command(about = "Study roadmaps and student profiles for Japanese tutors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory for profiles and settings
    #[arg(short, long, default_value = ".sensei")]
    data: PathBuf,

    /// Language of generated text (ja, en)
    #[arg(long, env = "SENSEI_LOCALE")]
    locale: Option<Locale>,
}

/// Plan inputs shared by `plan` and `save`.
#[derive(clap::Args)]
struct PlanArgs {
    /// Current level (0-100)
    #[arg(long)]
    current: f64,
    /// Target level (0-100)
    #[arg(long)]
    target: f64,
    /// Plan length in months
    #[arg(long)]
    months: Option<u32>,
    /// Purpose: anime, friends, travel, culture, live, work, beauty, challenge, other
    #[arg(long, default_value = "other")]
    purpose: Purpose,
}

impl PlanArgs {
    fn request(&self, settings: &Settings) -> Result<RoadmapRequest> {
        let request = RoadmapRequest::new(
            self.current,
            self.target,
            self.purpose,
            self.months.unwrap_or(settings.default_months),
        );
        request.validate()?;
        Ok(request)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a roadmap
    Plan {
        #[command(flatten)]
        args: PlanArgs,
        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Suggest a plan length
    Estimate {
        /// Current level (0-100)
        #[arg(long)]
        current: f64,
        /// Target level (0-100)
        #[arg(long)]
        target: f64,
    },
    /// Manage students
    Student {
        #[command(subcommand)]
        command: StudentCommands,
    },
    /// Generate a roadmap and save it to a student's profile
    Save {
        /// Student ID
        id: String,
        #[command(flatten)]
        args: PlanArgs,
    },
}

#[derive(Subcommand)]
enum StudentCommands {
    /// Add a student
    Add {
        /// Name
        name: String,
        /// Nationality
        #[arg(long)]
        nationality: Option<String>,
    },
    /// List students
    List,
    /// Show a student
    Show {
        /// Student ID
        id: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_student_id(id: &str) -> Result<StudentId> {
    id.parse().map_err(|_| anyhow!("Invalid student ID: {}", id))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.data).await?.with_locale(cli.locale);
    let engine = RoadmapEngine::new().with_config(EngineConfig { locale: settings.locale });

    match cli.command {
        Commands::Plan { args, json } => {
            let request = args.request(&settings)?;
            let projection = engine.project(&request);
            if json {
                println!("{}", serde_json::to_string_pretty(&projection)?);
            } else {
                print!("{}", render::render_projection(&request, &projection, engine.bundle()));
            }
        }
        Commands::Estimate { current, target } => {
            let months = estimate_months(current, target);
            if months == 0 {
                println!("No level step between Lv.{} and Lv.{}", current, target);
            } else {
                println!("Suggested period: {}{}", months, engine.bundle().month_unit);
            }
        }
        Commands::Student { command } => {
            let mut store = JsonProfileStore::new(&cli.data).await?;
            match command {
                StudentCommands::Add { name, nationality } => {
                    let mut student = Student::new(name, chrono::Utc::now());
                    student.nationality = nationality;
                    store.save_student(&student).await?;
                    println!("Added student: {} - {}", student.id, student.name);
                }
                StudentCommands::List => {
                    let students = store.list_students().await?;
                    println!("Students ({})", students.len());
                    for student in &students {
                        println!("  {}", render::render_student_line(student));
                    }
                }
                StudentCommands::Show { id } => {
                    let id = parse_student_id(&id)?;
                    let Some(student) = store.load_student(id).await? else {
                        println!("Student not found");
                        return Ok(());
                    };
                    print!("{}", render::render_student(&student));
                }
            }
        }
        Commands::Save { id, args } => {
            let id = parse_student_id(&id)?;
            let mut store = JsonProfileStore::new(&cli.data).await?;
            let mut student = store
                .load_student(id)
                .await?
                .ok_or_else(|| anyhow!("Student not found: {}", id))?;

            let request = args.request(&settings)?;
            let projection = engine.project(&request);
            let label = engine.bundle().purpose(request.purpose).label;
            let summary = PlanSummary::build(&request, &projection, label, chrono::Local::now().date_naive());
            summary.apply_to(&mut student);
            store.save_student(&student).await?;

            info!(student = %student.id, purpose = %request.purpose, "Saved roadmap to profile");
            println!("Saved roadmap to {}: {}", student.name, summary.goal_text);
        }
    }

    Ok(())
}
