//! CLI entry point for generating the dump-precedence documentation pages.
use clap::{Parser, Subcommand};
use dumpdoc::docs::{DocsGenerator, TableRegistry};
use tracing::info;

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate dump-setting precedence documentation tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    All {
        #[arg(short, long, default_value = "docs/serialization")]
        output: String,
    },
    Table {
        name: String,
        #[arg(short, long, default_value = "docs/serialization")]
        output: String,
    },
    List {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dumpdoc::tracing_config::init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::All { output } => {
            info!("Generating all tables into {output}");
            let generator = DocsGenerator::new().with_output_dir(output);
            generator.generate_all()?;
        }
        Commands::Table { name, output } => {
            info!("Generating table '{name}' into {output}");
            let generator = DocsGenerator::new().with_output_dir(output);
            generator.generate_table_by_name(&name)?;
        }
        Commands::List { json } => {
            if json {
                let summaries: Vec<_> = TableRegistry::get_all()
                    .iter()
                    .map(|table| table.summary())
                    .collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                let generator = DocsGenerator::new();
                println!("Available tables:");
                for table in generator.list_tables() {
                    println!("  - {}", table);
                }
            }
        }
    }

    Ok(())
}
