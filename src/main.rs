use env_logger;

use std::error::Error;

use colored::*;
use indicatif::{ ProgressBar, ProgressStyle };
use log::error;
use reqwest::Client;

mod fetch_page;
mod names;
mod pageviews;
mod ranking;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let client: Client = Client::new();

    println!("Getting the list of the world's greatest mathematicians....");
    let names: Vec<String> = names::get_names(&client).await?;
    println!("... done.\n");

    println!("Getting stats for each name....");

    let progress_bar: ProgressBar = ProgressBar::new(names.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "[{elapsed_precise}] [{wide_bar:40.cyan/blue}] Names: {pos}/{len} | Time Left: {eta} | {msg}"
            )
            .unwrap()
            .progress_chars("#>-")
    );
    progress_bar.tick();

    // One name at a time; a failed lookup is logged and recorded as absent,
    // never allowed to stop the remaining names
    let mut outcomes: Vec<(String, Option<u64>)> = Vec::new();
    for name in names {
        let hits: Option<u64> = match pageviews::get_hits_on_name(&client, &name).await {
            Ok(hits) => hits,
            Err(e) => {
                error!("error encountered while processing {}, skipping: {}", name, e);
                None
            }
        };
        progress_bar.set_message(name.clone().cyan().to_string());
        progress_bar.inc(1);
        outcomes.push((name, hits));
    }
    progress_bar.finish_and_clear();
    println!("... done.\n");

    let mut results: Vec<ranking::RankedEntry> = ranking::aggregate(outcomes);
    ranking::sort_descending(&mut results);

    println!("\nThe most popular mathematicians are:\n");
    for entry in ranking::top(&results, 5) {
        println!("{} with {} pageviews", entry.name.green().bold(), entry.views);
    }

    println!(
        "\nBut we did not find results for {} mathematicians on the list",
        ranking::unresolved_count(&results).to_string().yellow()
    );

    Ok(())
}
