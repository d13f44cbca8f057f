//! Fleetdeck command-line surface.
//!
//! # Responsibility
//! - Expose the navigation surface (login, dashboard, calendar, ship
//!   and job registration, demo seeding) as subcommands.
//! - Gate page rendering on an authenticated session.
//!
//! # Invariants
//! - Credential failure prints exactly "Invalid email or password" and
//!   exits nonzero; no page renders without a session.
//! - All errors are rendered once, at this boundary.

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use fleetdeck_core::db::open_db;
use fleetdeck_core::{
    init_logging, validate_credentials, CalendarService, DashboardService, DashboardSnapshot,
    FleetService, KvComponentRepository, KvJobRepository, KvShipRepository, NewJob, NewShip,
    SessionContext, ShipId,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

const DEFAULT_DB_FILE: &str = "fleetdeck.sqlite3";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Parser)]
#[command(
    name = "fleetdeck",
    version,
    about = "Ship maintenance dashboard over a local store"
)]
struct Cli {
    /// Store file path.
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    /// Absolute directory for rolling log files. Logging stays off when
    /// unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Credentials {
    /// Demo account email.
    #[arg(long)]
    email: String,

    /// Demo account password.
    #[arg(long)]
    password: String,
}

#[derive(Subcommand)]
enum Command {
    /// Validate demo credentials and print the session greeting.
    Login(Credentials),
    /// Render the KPI summary, recent jobs, and per-ship breakdown.
    Dashboard(Credentials),
    /// Render the maintenance schedule grouped by date.
    Calendar {
        #[command(flatten)]
        credentials: Credentials,

        /// Narrow the schedule to one ship id (default: fleet-wide).
        #[arg(long)]
        ship: Option<Uuid>,
    },
    /// Ship registry operations.
    Ship {
        #[command(flatten)]
        credentials: Credentials,

        #[command(subcommand)]
        action: ShipCommand,
    },
    /// Maintenance job operations.
    Job {
        #[command(flatten)]
        credentials: Credentials,

        #[command(subcommand)]
        action: JobCommand,
    },
    /// Install a small demo fleet when the store is empty.
    Seed {
        #[command(flatten)]
        credentials: Credentials,
    },
}

#[derive(Subcommand)]
enum ShipCommand {
    /// Register a new ship.
    Add {
        /// Display name.
        #[arg(long)]
        name: String,
        /// IMO registration number.
        #[arg(long)]
        imo: Option<String>,
        /// Flag state.
        #[arg(long)]
        flag: Option<String>,
    },
    /// List all registered ships.
    List,
}

#[derive(Subcommand)]
enum JobCommand {
    /// Create a maintenance job for an existing ship.
    Add {
        /// Target ship id.
        #[arg(long)]
        ship: Uuid,
        /// Target component id, when scoped below ship level.
        #[arg(long)]
        component: Option<Uuid>,
        /// Job category, e.g. "Inspection".
        #[arg(long)]
        job_type: Option<String>,
        /// Priority label, e.g. "High".
        #[arg(long)]
        priority: Option<String>,
        /// Status string (default "Open"); stored verbatim.
        #[arg(long)]
        status: Option<String>,
        /// Scheduled date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all maintenance jobs.
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = fleetdeck_core::default_log_level();
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let conn = match open_db(&cli.db) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: failed to open store `{}`: {err}", cli.db.display());
            return ExitCode::FAILURE;
        }
    };

    match run(&conn, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(conn: &Connection, command: Command) -> Result<(), String> {
    match command {
        Command::Login(credentials) => {
            let session = authenticate(&credentials)?;
            // authenticate() only returns authenticated sessions.
            if let Some(greeting) = session.greeting() {
                println!("{greeting}");
            }
            Ok(())
        }
        Command::Dashboard(credentials) => {
            let session = authenticate(&credentials)?;
            render_dashboard(conn, &session)
        }
        Command::Calendar { credentials, ship } => {
            let _session = authenticate(&credentials)?;
            render_calendar(conn, ship)
        }
        Command::Ship {
            credentials,
            action,
        } => {
            let _session = authenticate(&credentials)?;
            run_ship_command(conn, action)
        }
        Command::Job {
            credentials,
            action,
        } => {
            let _session = authenticate(&credentials)?;
            run_job_command(conn, action)
        }
        Command::Seed { credentials } => {
            let _session = authenticate(&credentials)?;
            let fleet = fleet_service(conn);
            let seeded = fleet
                .seed_demo_data(Local::now().date_naive())
                .map_err(|err| format!("error: {err}"))?;
            if seeded {
                println!("Demo fleet installed.");
            } else {
                println!("Store already holds ships; nothing seeded.");
            }
            Ok(())
        }
    }
}

/// Validates credentials and returns an authenticated session, or the
/// fixed user-visible rejection line.
fn authenticate(credentials: &Credentials) -> Result<SessionContext, String> {
    match validate_credentials(&credentials.email, &credentials.password) {
        Some(user) => {
            let mut session = SessionContext::new();
            session.login(user);
            Ok(session)
        }
        None => Err(INVALID_CREDENTIALS_MESSAGE.to_string()),
    }
}

fn render_dashboard(conn: &Connection, session: &SessionContext) -> Result<(), String> {
    let service = DashboardService::new(
        KvShipRepository::new(conn),
        KvComponentRepository::new(conn),
        KvJobRepository::new(conn),
    );
    let snapshot = service
        .load_snapshot(Local::now().date_naive())
        .map_err(|err| format!("error: {err}"))?;

    if let Some(greeting) = session.greeting() {
        println!("{greeting}");
        println!();
    }

    let stats = snapshot.stats;
    println!("Total ships:        {}", stats.total_ships);
    println!("Overdue components: {}", stats.overdue_components);
    println!("Jobs in progress:   {}", stats.jobs_in_progress);
    println!("Completed jobs:     {}", stats.completed_jobs);

    println!();
    println!("Recent jobs:");
    if snapshot.recent_jobs.is_empty() {
        println!("  (none)");
    }
    for job in &snapshot.recent_jobs {
        let date = job
            .scheduled_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "unscheduled".to_string());
        println!(
            "  {date}  {:12}  {}  {}",
            job.status,
            job.job_type.as_deref().unwrap_or("-"),
            ship_name(&snapshot, job.ship_id)
        );
    }

    println!();
    println!("Jobs per ship:");
    if snapshot.jobs_per_ship.is_empty() {
        println!("  (none)");
    }
    for entry in &snapshot.jobs_per_ship {
        println!("  {:24}  {}", entry.ship_name, entry.job_count);
    }

    Ok(())
}

fn ship_name(snapshot: &DashboardSnapshot, ship_id: ShipId) -> String {
    snapshot
        .jobs_per_ship
        .iter()
        .find(|entry| entry.ship_id == ship_id)
        .map(|entry| entry.ship_name.clone())
        .unwrap_or_else(|| ship_id.to_string())
}

fn render_calendar(conn: &Connection, ship: Option<Uuid>) -> Result<(), String> {
    let service = CalendarService::new(KvJobRepository::new(conn));
    let schedule = service
        .load_schedule(ship)
        .map_err(|err| format!("error: {err}"))?;

    if schedule.is_empty() {
        println!("No scheduled jobs.");
        return Ok(());
    }

    for (date, jobs) in &schedule {
        println!("{date}");
        for job in jobs {
            println!(
                "  {:12}  {}  ship={}",
                job.status,
                job.job_type.as_deref().unwrap_or("-"),
                job.ship_id
            );
        }
    }

    Ok(())
}

fn run_ship_command(conn: &Connection, action: ShipCommand) -> Result<(), String> {
    let fleet = fleet_service(conn);
    match action {
        ShipCommand::Add { name, imo, flag } => {
            let id = fleet
                .add_ship(NewShip { name, imo, flag })
                .map_err(|err| format!("error: {err}"))?;
            println!("Ship registered: {id}");
            Ok(())
        }
        ShipCommand::List => {
            let ships = fleet.ships().map_err(|err| format!("error: {err}"))?;
            if ships.is_empty() {
                println!("No ships registered.");
            }
            for ship in ships {
                println!(
                    "{}  {:24}  imo={}  flag={}",
                    ship.id,
                    ship.name,
                    ship.imo.as_deref().unwrap_or("-"),
                    ship.flag.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
    }
}

fn run_job_command(conn: &Connection, action: JobCommand) -> Result<(), String> {
    let fleet = fleet_service(conn);
    match action {
        JobCommand::Add {
            ship,
            component,
            job_type,
            priority,
            status,
            date,
        } => {
            let id = fleet
                .add_job(NewJob {
                    ship_id: ship,
                    component_id: component,
                    job_type,
                    priority,
                    status,
                    scheduled_date: date,
                })
                .map_err(|err| format!("error: {err}"))?;
            println!("Job created: {id}");
            Ok(())
        }
        JobCommand::List => {
            let jobs = fleet.jobs().map_err(|err| format!("error: {err}"))?;
            if jobs.is_empty() {
                println!("No jobs recorded.");
            }
            for job in jobs {
                let date = job
                    .scheduled_date
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| "unscheduled".to_string());
                println!(
                    "{}  {date}  {:12}  {}  ship={}",
                    job.id,
                    job.status,
                    job.job_type.as_deref().unwrap_or("-"),
                    job.ship_id
                );
            }
            Ok(())
        }
    }
}

fn fleet_service(
    conn: &Connection,
) -> FleetService<KvShipRepository<'_>, KvComponentRepository<'_>, KvJobRepository<'_>> {
    FleetService::new(
        KvShipRepository::new(conn),
        KvComponentRepository::new(conn),
        KvJobRepository::new(conn),
    )
}
