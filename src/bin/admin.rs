//! CLI administration tool for school-api.
//!
//! Provides commands for inspecting and maintaining the school database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user interactively
//! cargo run --bin admin -- user create
//!
//! # Show a student's courses
//! cargo run --bin admin -- student show 1
//!
//! # Delete a course (asks for confirmation)
//! cargo run --bin admin -- course delete 2
//!
//! # View row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use school_api::application::services::{SchoolService, UserService};
use school_api::config::mask_connection_string;
use school_api::domain::entities::NewUser;
use school_api::error::AppError;
use school_api::infrastructure::persistence::{
    PgCourseRepository, PgStudentRepository, PgUserRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing school-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect students
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a user
    Create {
        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all users
    List,
}

/// Student subcommands.
#[derive(Subcommand)]
enum StudentAction {
    /// Show a student and their courses
    Show {
        /// Student ID
        id: i64,
    },
}

/// Course subcommands.
#[derive(Subcommand)]
enum CourseAction {
    /// Delete a course and its enrollments
    Delete {
        /// Course ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::User { action } => handle_user_action(action, pool).await?,
        Commands::Student { action } => handle_student_action(action, pool).await?,
        Commands::Course { action } => handle_course_action(action, pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn school_service(pool: Arc<PgPool>) -> SchoolService {
    SchoolService::new(
        Arc::new(PgStudentRepository::new(pool.clone())),
        Arc::new(PgCourseRepository::new(pool)),
    )
}

/// Converts a service error into a CLI error.
fn cli_error(e: AppError) -> anyhow::Error {
    match e {
        AppError::Conflict { .. } => anyhow::anyhow!("Already exists: {}", e),
        _ => anyhow::anyhow!("{}", e),
    }
}

/// Dispatches user commands.
async fn handle_user_action(action: UserAction, pool: Arc<PgPool>) -> Result<()> {
    let service = UserService::new(Arc::new(PgUserRepository::new(pool)));

    match action {
        UserAction::Create { email, name } => {
            println!("{}", "👤 Create User".bright_blue().bold());
            println!();

            let email = match email {
                Some(e) => e,
                None => Input::new().with_prompt("Email").interact_text()?,
            };

            let user = service
                .create_user(NewUser { email, name })
                .await
                .map_err(cli_error)?;

            println!(
                "{} {} (id {})",
                "✅ Created".green().bold(),
                user.email.cyan(),
                user.id.to_string().bright_white()
            );
        }
        UserAction::List => {
            println!("{}", "📋 Users".bright_blue().bold());
            println!();

            let users = service.get_all_users().await.map_err(cli_error)?;

            if users.is_empty() {
                println!("{}", "  No users found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<35} {:<25} {:<20}",
                "ID".bright_white().bold(),
                "Email".bright_white().bold(),
                "Name".bright_white().bold(),
                "Created".bright_white().bold()
            );
            println!("  {}", "─".repeat(85).bright_black());

            for user in &users {
                println!(
                    "  {:<5} {:<35} {:<25} {}",
                    user.id.to_string().bright_black(),
                    user.email.cyan(),
                    user.name.as_deref().unwrap_or("-"),
                    user.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black()
                );
            }

            println!();
            println!("  Total: {}", users.len().to_string().bright_white().bold());
        }
    }

    Ok(())
}

/// Prints a student's transcript.
async fn handle_student_action(action: StudentAction, pool: Arc<PgPool>) -> Result<()> {
    match action {
        StudentAction::Show { id } => {
            let student = school_service(pool)
                .get_student_transcript(id)
                .await
                .map_err(cli_error)?;

            println!("{}", "🎓 Student".bright_blue().bold());
            println!();
            println!("  Name:    {}", student.name.cyan());
            println!("  Email:   {}", student.email);
            println!(
                "  Created: {}",
                student.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
            );
            println!();

            if student.courses.is_empty() {
                println!("{}", "  Not enrolled in any course".yellow());
                return Ok(());
            }

            for course in &student.courses {
                println!(
                    "  {:<10} {}",
                    course.code.bright_yellow(),
                    course.title
                );
            }
        }
    }

    Ok(())
}

/// Deletes a course after confirmation.
async fn handle_course_action(action: CourseAction, pool: Arc<PgPool>) -> Result<()> {
    match action {
        CourseAction::Delete { id, yes } => {
            let enrolled: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE course_id = $1")
                    .bind(id)
                    .fetch_one(pool.as_ref())
                    .await?;

            println!("{}", "🗑  Delete Course".bright_blue().bold());
            println!();
            println!("  Course ID:          {}", id.to_string().cyan());
            println!(
                "  Enrolled students:  {}",
                enrolled.to_string().bright_white()
            );
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this course and its enrollments?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            school_service(pool)
                .delete_course(id)
                .await
                .map_err(cli_error)?;

            println!("{}", "✅ Course deleted successfully!".green().bold());
        }
    }

    Ok(())
}

/// Displays row counts for every table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Users", "users"),
        ("Students", "students"),
        ("Courses", "courses"),
        ("Enrollments", "enrollments"),
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;

        println!(
            "  {:<13} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
