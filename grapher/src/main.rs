use anyhow::Result;
use clap::error::ErrorKind;
use grapher_core::crawl::{execute_crawl, CrawlOptions};
use std::time::Duration;

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout carries only the DOT output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut cmd = commands::command_argument_builder();
    let matches = match cmd.clone().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            e.exit()
        }
        Err(_) => {
            // Bad arguments are a usage problem, not a runtime fault:
            // print usage and exit cleanly without crawling.
            println!("{}", cmd.render_help());
            return Ok(());
        }
    };

    let Some(host) = matches.get_one::<String>("HOST") else {
        println!("{}", cmd.render_help());
        return Ok(());
    };

    let mut options = CrawlOptions::new(host);
    options.workers = *matches.get_one::<usize>("workers").unwrap();
    options.timeout = Duration::from_secs(*matches.get_one::<u64>("timeout").unwrap());

    let graph = execute_crawl(options).await?;
    print!("{}", graph);

    Ok(())
}
