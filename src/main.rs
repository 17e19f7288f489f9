use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Context, Result, eyre};
use std::path::PathBuf;
use todolist::{TaskId, TaskListStore, snapshot};

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "Todolist CLI - single-screen to-do list")]
#[command(version)]
struct Cli {
    /// Path to the saved list (default: platform data directory)
    #[arg(short, long)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    Add {
        /// Task label (trimmed; at most 80 characters)
        label: String,
    },

    /// Show active and completed tasks
    List,

    /// Flip a task between active and completed
    Toggle { id: TaskId },

    /// Remove a task
    Delete { id: TaskId },

    /// Remove every completed task
    ClearCompleted,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let path = match cli.state_file {
        Some(path) => path,
        None => default_state_file()?,
    };

    // Restore the saved list, or start with the sample seed on first launch
    let mut store = match snapshot::load_from_path(&path)? {
        Some(snap) => TaskListStore::restore(snap).context("Failed to restore saved list")?,
        None => TaskListStore::new(),
    };

    match cli.command {
        Commands::Add { label } => {
            store.set_draft(label);
            match store.add_task() {
                Some(id) => println!("Added {}", id.to_string().dimmed()),
                None => {
                    // advisory, not an error: the list is left untouched
                    if let Some(msg) = store.validation().message {
                        println!("{}", msg.yellow());
                    }
                }
            }
        }
        Commands::List => print_list(&store),
        Commands::Toggle { id } => {
            if store.toggle(id) {
                println!("Toggled {}", id.to_string().dimmed());
            } else {
                println!("No task with id {}", id);
            }
        }
        Commands::Delete { id } => {
            if store.delete(id) {
                println!("Deleted {}", id.to_string().dimmed());
            } else {
                println!("No task with id {}", id);
            }
        }
        Commands::ClearCompleted => {
            let removed = store.clear_completed();
            println!("Cleared {} completed task(s)", removed);
        }
    }

    snapshot::save_to_path(&store.export(), &path)?;

    Ok(())
}

fn default_state_file() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| eyre!("Could not determine a data directory; pass --state-file"))?;
    Ok(base.join("todolist").join("tasks.json"))
}

fn print_list(store: &TaskListStore) {
    let active: Vec<_> = store.active_tasks().collect();
    if active.is_empty() {
        println!("{}", "No items yet.".dimmed());
    } else {
        println!("{}", "Items".bold());
        for task in active {
            println!("  {}  {}", task.id.to_string().dimmed(), task.label);
        }
    }

    println!();

    let completed: Vec<_> = store.completed_tasks().collect();
    if completed.is_empty() {
        println!("{}", "No completed items yet.".dimmed());
    } else {
        println!("{}", "Completed Items".bold());
        for task in completed {
            println!(
                "  {}  {}",
                task.id.to_string().dimmed(),
                task.label.strikethrough()
            );
        }
    }
}
