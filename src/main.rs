use clap::Parser;
use tracing_subscriber::EnvFilter;

use atlas::{
    cli::commands::{
        automations::AutomationsCommand, blog::BlogCommand, browse::BrowseCommand,
        categories::CategoriesCommand, show::ShowCommand, CommandHandler,
    },
    cli::{Cli, Commands},
    Result,
};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let catalog = cli.catalog;

    match cli.command {
        Commands::Browse {
            search,
            category,
            framework,
            price,
            ai_ready,
            sort,
            format,
        } => {
            let command = BrowseCommand {
                search,
                categories: category,
                frameworks: framework,
                prices: price,
                ai_ready,
                sort,
                format,
                catalog,
            };
            command.execute()?;
        }
        Commands::Automations {
            search,
            category,
            tool,
            difficulty,
            ai_ready,
            sort,
            format,
        } => {
            let command = AutomationsCommand {
                search,
                categories: category,
                tools: tool,
                difficulties: difficulty,
                ai_ready,
                sort,
                format,
                catalog,
            };
            command.execute()?;
        }
        Commands::Show { id, kind, format } => {
            let command = ShowCommand::new(id, kind, format, catalog);
            command.execute()?;
        }
        Commands::Blog {
            slug,
            search,
            category,
            format,
        } => {
            let command = BlogCommand {
                slug,
                search,
                category,
                format,
                catalog,
            };
            command.execute()?;
        }
        Commands::Categories {
            automations,
            format,
        } => {
            let command = CategoriesCommand {
                automations,
                format,
                catalog,
            };
            command.execute()?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // logs to stderr, not stdout
        .init();
}
