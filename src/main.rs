use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use taskpad::api::{CmdMessage, CmdResult, MessageLevel, TaskpadApi};
use taskpad::error::Result;
use taskpad::store::fs::FileStore;
use taskpad::table;

mod args;
use args::{Cli, Commands};

const STORE_FILENAME: &str = "store.json";
const STORE_PATH_ENV: &str = "TASKPAD_STORE";

const LIST_DIVIDE_EVERY: usize = 3;
const FILTER_DIVIDE_EVERY: usize = 1;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = TaskpadApi::new(FileStore::new(store_path()));

    match cli.command {
        Some(Commands::Add {
            task,
            priority,
            tags,
        }) => {
            let result = api.add_task(task, priority, tags)?;
            print_messages(&result.messages);
        }
        Some(Commands::Rm { task_ids }) => {
            let result = api.remove_tasks(&task_ids)?;
            print_messages(&result.messages);
        }
        Some(Commands::Edit {
            task_ids,
            priority,
            tags,
        }) => {
            let result = api.edit_tasks(&task_ids, priority, tags)?;
            print_messages(&result.messages);
        }
        Some(Commands::Filter { tags_match }) => {
            let result = api.filter_tasks(&tags_match)?;
            // Zero matches still gets a header-only table.
            print_table(&result, FILTER_DIVIDE_EVERY);
        }
        None => {
            let result = api.list_tasks()?;
            if !result.listed_tasks.is_empty() {
                print_table(&result, LIST_DIVIDE_EVERY);
            }
            print_messages(&result.messages);
        }
    }

    Ok(())
}

/// Store location: `TASKPAD_STORE` if set, otherwise `store.json` next to
/// the executable, falling back to the working directory.
fn store_path() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_PATH_ENV) {
        return PathBuf::from(path);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(STORE_FILENAME)))
        .unwrap_or_else(|| PathBuf::from(STORE_FILENAME))
}

fn print_table(result: &CmdResult, divide_every: usize) {
    // The rendered table carries its own blank-line padding.
    print!("{}", table::render(&result.listed_tasks, divide_every));
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
