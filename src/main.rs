use clap::{CommandFactory, Parser};
use probehound::cli::args::Cli;
use probehound::core::context::Context;
use probehound::core::engine::Engine;
use std::env;
use tracing::Level;

const BANNER: &str = r#"
 ╔════════════════════════════════════════════════════════════════════╗
 ║                                                                    ║
 ║    ██████╗ ██████╗  ██████╗ ██████╗ ███████╗                       ║
 ║    ██╔══██╗██╔══██╗██╔═══██╗██╔══██╗██╔════╝                       ║
 ║    ██████╔╝██████╔╝██║   ██║██████╔╝█████╗                         ║
 ║    ██╔═══╝ ██╔══██╗██║   ██║██╔══██╗██╔══╝                         ║
 ║    ██║     ██║  ██║╚██████╔╝██████╔╝███████╗                       ║
 ║    ╚═╝     ╚═╝  ╚═╝ ╚═════╝ ╚═════╝ ╚══════╝  HOUND                ║
 ║                                                                    ║
 ║    Heuristic reflected XSS and SQL injection probe                 ║
 ║                                                                    ║
 ║    License : Apache-2.0                                            ║
 ║                                                                    ║
 ╚════════════════════════════════════════════════════════════════════╝
"#;

fn print_banner() {
    eprintln!("\x1b[36m{}\x1b[0m", BANNER); // Cyan color
    eprintln!("  Version {}\n", env!("CARGO_PKG_VERSION"));
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let show_help = args.iter().any(|a| a == "--help" || a == "-h");
    let no_banner = args.iter().any(|a| a == "--no-banner");

    // Banner ahead of help text
    if show_help {
        if !no_banner {
            print_banner();
        }
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();

    if !cli.no_banner && !cli.quiet {
        print_banner();
    }

    init_logging(cli.quiet, cli.verbose);

    let ctx = Context::from_cli(cli)?;
    let engine = Engine::new(ctx)?;
    engine.run().await?;

    Ok(())
}
