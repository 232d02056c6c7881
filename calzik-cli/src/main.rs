mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calzik_core::Calzik;
use calzik_core::model::{ContactKind, EventKind, EventStatus, Role, TimeSlot};
use calzik_core::workspace::Workspace;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calzik")]
#[command(about = "Manage your band: availability, concerts, contacts and invoices")]
struct Cli {
    /// Don't ask for confirmation before deleting
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory
    Init {
        /// Fill it with a demo band
        #[arg(long)]
        demo: bool,
    },
    Login {
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    Logout,
    /// Show who is logged in
    Whoami,
    /// Overview of what's coming up
    Dashboard,
    #[command(subcommand)]
    Availability(AvailabilityCommand),
    #[command(subcommand)]
    Events(EventsCommand),
    #[command(subcommand)]
    Contacts(ContactsCommand),
    #[command(subcommand)]
    Invoices(InvoicesCommand),
    /// List notifications
    Notifications {
        /// Mark them all as read
        #[arg(long)]
        read: bool,
    },
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Ideas(IdeasCommand),
    #[command(subcommand)]
    Docs(DocsCommand),
    /// Show configuration and data paths
    Config,
}

#[derive(Subcommand)]
enum AvailabilityCommand {
    /// Who is available, slot by slot
    Grid {
        /// First day (YYYY-MM-DD or "today")
        #[arg(long)]
        from: Option<String>,

        /// Number of days to show
        #[arg(long)]
        days: Option<i64>,
    },
    /// Flip your answer for a slot
    Toggle { date: NaiveDate, slot: TimeSlot },
    /// Declare yourself available
    Add {
        date: NaiveDate,

        #[arg(value_parser = parse_time)]
        start: NaiveTime,

        #[arg(value_parser = parse_time)]
        end: NaiveTime,
    },
    /// Your own answers
    Mine,
}

#[derive(Subcommand)]
enum EventsCommand {
    List {
        /// Include past events
        #[arg(long)]
        all: bool,
    },
    Add {
        title: String,

        #[arg(short, long)]
        date: NaiveDate,

        /// Start time (HH:MM)
        #[arg(short, long, value_parser = parse_time)]
        time: NaiveTime,

        /// End time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        end: Option<NaiveTime>,

        #[arg(long)]
        venue: String,

        /// concert, rehearsal or audition
        #[arg(long, default_value = "concert")]
        kind: EventKind,

        #[arg(long, default_value = "pending")]
        status: EventStatus,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Change an event's details
    Edit {
        id: String,

        #[command(flatten)]
        changes: commands::events::EventChanges,
    },
    Status { id: String, status: EventStatus },
    Delete { id: String },
}

#[derive(Subcommand)]
enum ContactsCommand {
    List {
        /// Match name, city or email
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        kind: Option<ContactKind>,

        #[arg(long)]
        city: Option<String>,
    },
    Add {
        name: String,

        /// salle, association, festival or autre
        #[arg(long, default_value = "salle")]
        kind: ContactKind,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long, default_value = "")]
        city: String,

        #[arg(long, default_value = "")]
        postal_code: String,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Change a contact's details
    Edit {
        id: String,

        #[command(flatten)]
        changes: commands::contacts::ContactChanges,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
enum InvoicesCommand {
    List,
    New(commands::invoices::NewInvoiceArgs),
    /// Mark an invoice paid, or unpaid again
    Paid { id: String },
}

#[derive(Subcommand)]
enum UsersCommand {
    List,
    Add {
        email: String,
        name: String,

        #[arg(long, default_value = "")]
        instrument: String,

        #[arg(long, default_value = "member")]
        role: Role,
    },
    ToggleActive { id: String },
    ToggleRole { id: String },
}

#[derive(Subcommand)]
enum IdeasCommand {
    List,
    Add { text: String },
    Done { id: String },
    Reopen { id: String },
    Edit { id: String, text: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum DocsCommand {
    List,
    Add {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    Delete { id: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();
    let calzik = Calzik::load()?;

    match cli.command {
        Commands::Init { demo } => commands::init::run(&calzik, demo, cli.yes, today),
        Commands::Config => commands::config::run(&calzik),
        Commands::Login { email, password } => {
            let mut workspace = open_workspace(&calzik, today)?;
            commands::session::login(&mut workspace, &email, password)
        }
        Commands::Logout => {
            let mut workspace = open_workspace(&calzik, today)?;
            commands::session::logout(&mut workspace)
        }
        Commands::Whoami => commands::session::whoami(&open_workspace(&calzik, today)?),
        Commands::Dashboard => commands::dashboard::run(&open_workspace(&calzik, today)?, today),
        Commands::Availability(command) => {
            let mut workspace = open_workspace(&calzik, today)?;
            match command {
                AvailabilityCommand::Grid { from, days } => commands::availability::grid(
                    &workspace,
                    &calzik.slots()?,
                    from.as_deref(),
                    days,
                    today,
                ),
                AvailabilityCommand::Toggle { date, slot } => {
                    commands::availability::toggle(&mut workspace, date, slot)
                }
                AvailabilityCommand::Add { date, start, end } => {
                    commands::availability::add(&mut workspace, date, start, end)
                }
                AvailabilityCommand::Mine => commands::availability::mine(&workspace, today),
            }
        }
        Commands::Events(command) => {
            let mut workspace = open_workspace(&calzik, today)?;
            match command {
                EventsCommand::List { all } => commands::events::list(&workspace, all, today),
                EventsCommand::Add {
                    title,
                    date,
                    time,
                    end,
                    venue,
                    kind,
                    status,
                    contact,
                    description,
                } => commands::events::add(
                    &mut workspace,
                    calzik_core::model::ConcertDraft {
                        title,
                        date,
                        time,
                        end_time: end,
                        venue,
                        kind,
                        status,
                        contact_id: contact,
                        description,
                        created_by: String::new(),
                    },
                ),
                EventsCommand::Edit { id, changes } => {
                    commands::events::edit(&mut workspace, &id, changes)
                }
                EventsCommand::Status { id, status } => {
                    commands::events::set_status(&mut workspace, &id, status)
                }
                EventsCommand::Delete { id } => {
                    commands::events::delete(&mut workspace, &id, cli.yes)
                }
            }
        }
        Commands::Contacts(command) => {
            let mut workspace = open_workspace(&calzik, today)?;
            match command {
                ContactsCommand::List { search, kind, city } => commands::contacts::list(
                    &workspace,
                    calzik_core::model::ContactFilter {
                        search: search.unwrap_or_default(),
                        kind,
                        city: city.unwrap_or_default(),
                    },
                ),
                ContactsCommand::Add {
                    name,
                    kind,
                    email,
                    phone,
                    address,
                    city,
                    postal_code,
                    notes,
                } => commands::contacts::add(
                    &mut workspace,
                    calzik_core::model::Contact {
                        id: calzik_core::model::new_id(),
                        name,
                        kind,
                        email,
                        phone,
                        address,
                        city,
                        postal_code,
                        notes,
                    },
                ),
                ContactsCommand::Edit { id, changes } => {
                    commands::contacts::edit(&mut workspace, &id, changes)
                }
                ContactsCommand::Delete { id } => {
                    commands::contacts::delete(&mut workspace, &id, cli.yes)
                }
            }
        }
        Commands::Invoices(command) => {
            let mut workspace = open_workspace(&calzik, today)?;
            match command {
                InvoicesCommand::List => commands::invoices::list(&workspace, today),
                InvoicesCommand::New(args) => {
                    commands::invoices::new(&mut workspace, calzik.config(), args, today)
                }
                InvoicesCommand::Paid { id } => {
                    commands::invoices::toggle_paid(&mut workspace, &id, today)
                }
            }
        }
        Commands::Notifications { read } => {
            let mut workspace = open_workspace(&calzik, today)?;
            commands::notifications::run(&mut workspace, read)
        }
        Commands::Users(command) => {
            let mut workspace = open_workspace(&calzik, today)?;
            match command {
                UsersCommand::List => commands::users::list(&workspace, today),
                UsersCommand::Add {
                    email,
                    name,
                    instrument,
                    role,
                } => commands::users::add(&mut workspace, &email, &name, &instrument, role),
                UsersCommand::ToggleActive { id } => {
                    commands::users::toggle_active(&mut workspace, &id)
                }
                UsersCommand::ToggleRole { id } => commands::users::toggle_role(&mut workspace, &id),
            }
        }
        Commands::Ideas(command) => {
            let mut workspace = open_workspace(&calzik, today)?;
            match command {
                IdeasCommand::List => commands::ideas::list(&workspace),
                IdeasCommand::Add { text } => commands::ideas::add(&mut workspace, &text, today),
                IdeasCommand::Done { id } => commands::ideas::done(&mut workspace, &id),
                IdeasCommand::Reopen { id } => commands::ideas::reopen(&mut workspace, &id),
                IdeasCommand::Edit { id, text } => commands::ideas::edit(&mut workspace, &id, &text),
                IdeasCommand::Delete { id } => commands::ideas::delete(&mut workspace, &id, cli.yes),
            }
        }
        Commands::Docs(command) => {
            let mut workspace = open_workspace(&calzik, today)?;
            match command {
                DocsCommand::List => commands::docs::list(&workspace),
                DocsCommand::Add { paths } => commands::docs::add(&mut workspace, &paths),
                DocsCommand::Delete { id } => commands::docs::delete(&mut workspace, &id, cli.yes),
            }
        }
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time '{}'. Expected HH:MM", s))
}

fn open_workspace(calzik: &Calzik, today: NaiveDate) -> Result<Workspace> {
    if !calzik.is_initialized() {
        anyhow::bail!(
            "No band data found in {}.\n\n\
            Set it up with:\n  \
            calzik init\n\n\
            Or try the demo band:\n  \
            calzik init --demo",
            calzik.display_path().display()
        );
    }

    Ok(calzik.open_workspace(today)?)
}
