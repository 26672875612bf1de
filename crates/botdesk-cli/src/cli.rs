//! CLI argument and command definitions.

use botdesk_core::AgentType;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "botdesk", version, about = "Manage chatbot agents stored on this machine")]
pub struct Cli {
    /// Storage file to use (overrides the config file).
    #[arg(long, global = true, env = "BOTDESK_STORAGE")]
    pub storage: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account name for the dashboard greeting.
    Signup(SignupArgs),

    /// Sign in and show the dashboard.
    Login {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out.
    Logout,

    /// Show the agent dashboard.
    List {
        /// Print the stored agents as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Create a new agent and print its embed code.
    Create {
        #[command(flatten)]
        fields: AgentFields,

        /// Copy the embed code to the clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// Update an existing agent and print its embed code.
    Edit {
        /// Agent ID.
        id: String,

        #[command(flatten)]
        fields: AgentFields,

        /// Copy the embed code to the clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// Delete an agent.
    Delete {
        /// Agent ID.
        id: String,
    },

    /// Print the embed code of an agent.
    Embed {
        /// Agent ID.
        id: String,

        /// Copy the embed code to the clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// Show the screen at a path such as /dashboard or /agent/<id>.
    Open {
        /// Screen path.
        #[arg(default_value = "/")]
        path: String,
    },
}

#[derive(Args)]
pub struct SignupArgs {
    #[arg(long, default_value = "")]
    pub username: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "+91")]
    pub country_code: String,
}

/// Agent form fields. Omitted fields keep their current value.
#[derive(Args, Debug, Default)]
pub struct AgentFields {
    /// Agent name.
    #[arg(long)]
    pub name: Option<String>,

    /// Agent type: college-query-bot, advanced-college-bot, admission-bot or summarisation-bot.
    #[arg(long = "type")]
    pub kind: Option<AgentType>,

    /// UI color as #rrggbb.
    #[arg(long)]
    pub color: Option<String>,

    /// Agent description.
    #[arg(long)]
    pub description: Option<String>,

    /// Document to upload (advanced-college-bot only). Repeat for several; replaces the current list.
    #[arg(long = "document", value_name = "PATH")]
    pub documents: Vec<PathBuf>,

    /// Remove every attached document.
    #[arg(long, conflicts_with = "documents")]
    pub clear_documents: bool,
}
