//! soundstage CLI binary entry point.

use clap::Parser;
use soundstage::cli::{run, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url.as_deref();

    let result = match cli.command {
        Commands::Persona(args) => run::handle_persona(base_url, args.command).await,
        Commands::Voice(args) => run::handle_voice(base_url, args.command).await,
        Commands::Room(args) => run::handle_room(base_url, args.command).await,
        Commands::Dialog(args) => run::handle_dialog(base_url, args).await,
        Commands::Audio(args) => run::handle_audio(base_url, args).await,
        Commands::Prefs(args) => run::handle_prefs(args.command).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
