pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;

use page_toc::config;
use page_toc::toc::TocOptions;
use page_toc::utils::error::BoxResult;

use types::{Cli, Commands, OptionArgs};

/// Run the command-line interface
pub fn run() {
    let cli = Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.verbose, cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = dispatch(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> BoxResult<()> {
    let options = resolve_options(&cli.options)?;

    match &cli.command {
        Commands::Render { .. } => commands::handle_render_command(&cli.command, &options),
        Commands::Normalize { .. } => commands::handle_normalize_command(&cli.command),
        Commands::Headings { .. } => commands::handle_headings_command(&cli.command, &options),
        Commands::Key { .. } => commands::handle_key_command(&cli.command, &options),
    }
}

/// Option file values, overridden by whatever was given on the command line
fn resolve_options(args: &OptionArgs) -> BoxResult<TocOptions> {
    let mut options = match &args.config {
        Some(path) => config::load_options(path)?,
        None => config::find_default_options(".")?,
    };

    if let Some(style) = &args.style {
        options.style = style.clone();
    }
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    if let Some(min_headers) = args.min_headers {
        options.min_headers = min_headers;
    }
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if args.no_numbering {
        options.numbering = false;
    }
    if args.no_toggle {
        options.toggle = false;
    }

    Ok(options.clamped())
}
