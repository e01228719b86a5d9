use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    pub command: NoteCommand,
}

#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
        /// Pin the note to a catalog entry.
        #[arg(long)]
        entry: Option<String>,
    },
    Ls {
        #[arg(long)]
        entry: Option<String>,
    },
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    Rm {
        id: String,
    },
}
