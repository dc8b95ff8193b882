use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(about = "A tiny priority-and-tags task tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        task: String,

        /// Priority, sorted lexically in reverse order (recommended: 0-9)
        #[arg(short, long)]
        priority: Option<String>,

        /// Tags; filter searches this string for each match term
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Remove one or more tasks
    Rm {
        /// Ids of the tasks (e.g. 0 2 5)
        #[arg(required = true, num_args = 1..)]
        task_ids: Vec<String>,
    },

    /// Change the priority or tags of one or more tasks
    Edit {
        /// Ids of the tasks (e.g. 0 2 5)
        #[arg(required = true, num_args = 1..)]
        task_ids: Vec<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<String>,

        /// New tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Show tasks whose tags contain any of the given terms
    Filter {
        /// Substrings to search the tags field for
        #[arg(required = true, num_args = 1..)]
        tags_match: Vec<String>,
    },
}
