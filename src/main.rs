use clap::Parser;
use folio::{Cli, Commands, FlagRewriter, IndexerConfig, Indexer, Result, RewriteConfig};
use log::{error, info};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    // Logging initialisieren, RUST_LOG hat Vorrang
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rewrite {
            root,
            extension,
            marker,
            replacement,
        } => {
            info!("Rewriting flags");
            let config = RewriteConfig {
                root: PathBuf::from(root),
                extension,
                marker,
                replacement,
            };
            let report = FlagRewriter::from_config(config).run()?;
            println!(
                "✓ {} replacements in {} of {} files",
                report.replacements, report.files_changed, report.files_visited
            );
        }

        Commands::Index {
            config,
            source,
            output_dir,
            extension,
            url_base,
            company,
            naming,
        } => {
            let mut settings = match config {
                Some(path) => IndexerConfig::from_json_file(&path)?,
                None => IndexerConfig::default(),
            };

            // CLI-Werte überschreiben die Datei
            if let Some(source) = source {
                settings.source_dir = PathBuf::from(source);
            }
            if let Some(output_dir) = output_dir {
                settings.output_dir = PathBuf::from(output_dir);
            }
            if let Some(extension) = extension {
                settings.extension = extension;
            }
            if let Some(url_base) = url_base {
                settings.url_base = url_base;
            }
            if let Some(company) = company {
                settings.company = company;
            }
            if let Some(naming) = naming {
                settings.naming = naming;
            }

            info!("Indexing certificates in {}", settings.source_dir.display());
            let output = settings.output_dir.clone();
            let report = Indexer::new(settings).run()?;

            for created in &report.created {
                let name = created
                    .target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                println!("Created: {}", name);
            }

            println!(
                "✓ Created {} documents in {}, skipped {}",
                report.created.len(),
                output.display(),
                report.skipped.len()
            );
            for skipped in &report.skipped {
                println!("  ✗ {}", skipped);
            }
        }

        Commands::ExampleConfig { output } => {
            info!("Writing default indexer settings");
            let json = serde_json::to_string_pretty(&IndexerConfig::default())?;
            std::fs::write(&output, json)?;
            println!("✓ Example file created: {}", output);
        }
    }

    Ok(())
}
