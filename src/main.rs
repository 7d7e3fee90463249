use anyhow::{bail, Context, Result};
use std::io;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use visa_map::{
    cli::{Cli, Commands},
    pipeline::VisaMap,
    render::{render_html, write_json, write_lists, write_lookup, write_tsv},
    ui::UiApp,
    writer::export_to_sqlite,
};

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.options.verbose);

    let settings = cli.options.settings();
    let map = VisaMap::build(&settings)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Render { output } => {
            let start = Instant::now();
            let page = render_html(&map.summary)?;
            std::fs::write(&output, page)
                .with_context(|| format!("Failed to write {:?}", output))?;

            if let Some(notice) = &map.summary.notice {
                eprintln!("{}", notice);
            }
            println!(
                "Created {:?} ({} regions) in {:.1}s",
                output,
                map.summary.locations.len(),
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Show => {
            drop(out);
            UiApp::new()?.run(&map.summary)?;
        }

        Commands::Classify { json } => {
            if json {
                write_json(&map.records, &mut out)?;
            } else {
                write_tsv(&map.records, &mut out)?;
            }
        }

        Commands::Export { output_db } => {
            let count = export_to_sqlite(&map.records, &output_db)?;
            println!("Created {:?} ({} records)", output_db, count);
        }

        Commands::Lookup { names } => {
            let mut missing = Vec::new();

            for name in &names {
                match map.lookup(name) {
                    Some(record) => write_lookup(name, record, &mut out)?,
                    None => missing.push(name.as_str()),
                }
            }

            if !missing.is_empty() {
                bail!("Unknown country: {}", missing.join(", "));
            }
        }

        Commands::Lists => {
            write_lists(&map.summary, &mut out)?;
        }
    }

    Ok(())
}
