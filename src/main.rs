use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;

use updraft::cli::{Args, Commands};
use updraft::config::{Destination, UploaderConfig};
use updraft::scanner::ScanConfig;
use updraft::stats::Summary;
use updraft::storage::{GcsStorage, ObjectStorage, S3Storage};
use updraft::uploader::Uploader;
use updraft::utils::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match args.cmd {
        Commands::Upload {
            path,
            config,
            dry_run,
            skip_hidden,
            max_depth,
            follow_symlinks,
            json,
        } => {
            let config = UploaderConfig::load_from_file(&config)?;
            let routes = config.routing_table();

            let mut backends: HashMap<Destination, Arc<dyn ObjectStorage>> = HashMap::new();
            if let Some(ref s3) = config.s3 {
                backends.insert(Destination::S3, Arc::new(S3Storage::new(s3)?));
            }
            if let Some(ref gcs) = config.gcs {
                backends.insert(Destination::Gcs, Arc::new(GcsStorage::new(gcs)?));
            }

            let scan = ScanConfig {
                include_hidden: !skip_hidden,
                max_depth: max_depth.unwrap_or(usize::MAX),
                follow_symlinks,
            };

            let uploader = Uploader::new(&routes, &backends)?
                .with_scan_config(scan)
                .dry_run(dry_run);

            let start = Instant::now();
            let outcomes = uploader.upload_files(&path).await?;

            for outcome in &outcomes {
                println!("{outcome}");
            }

            let summary = Summary::from_outcomes(&outcomes, start);
            if json {
                println!("{}", summary.to_json()?);
            } else {
                println!("\n{summary}");
            }

            if summary.errors > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
