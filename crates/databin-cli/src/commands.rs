use std::path::Path;

use colored::Colorize;

use databin_server::{DatabinServer, ServerConfig};
use databin_store::FileStore;

use crate::cli::{Cli, Command, InitArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Init(args) => cmd_init(args),
    }
}

/// Merge config sources: defaults, then the TOML file, then CLI flags.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse()?;
    }
    if let Some(data) = &args.data {
        config.data_path = data.into();
    }
    if let Some(assets) = &args.assets {
        config.static_dir = assets.into();
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    tracing::info!(
        data = %config.data_path.display(),
        assets = %config.static_dir.display(),
        "starting databin"
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(DatabinServer::new(config).serve())?;
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let existed = Path::new(&args.data).exists();
    FileStore::open(&args.data)?;
    if existed {
        println!("{} {} already initialized", "✓".green(), args.data.bold());
    } else {
        println!(
            "{} Created {} with an empty document",
            "✓".green().bold(),
            args.data.bold()
        );
    }
    Ok(())
}
