use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "databin",
    about = "Serve a single JSON document over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Create the data file if it does not exist
    Init(InitArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<String>,

    /// Path of the JSON data file
    #[arg(long)]
    pub data: Option<String>,

    /// Directory of static assets served for non-/data requests
    #[arg(long)]
    pub assets: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Path of the JSON data file
    #[arg(long, default_value = "data.json")]
    pub data: String,
}
