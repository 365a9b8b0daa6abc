//! Fetch command handler

use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use chatgrab::cli::FetchArgs;
use chatgrab::fetch::ShareClient;
use chatgrab::grab::parse_url_list;
use chatgrab::{Config, Grabber};

/// Fetch every requested conversation and save its transcript.
///
/// A failing URL does not stop the batch; the command fails at the end if
/// any URL failed.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: FetchArgs, config: &Config) -> Result<()> {
    let mut urls = args.urls;

    if let Some(path) = &args.input_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path))?;
        let listed = parse_url_list(&content);
        if listed.is_empty() {
            bail!("No URLs found in {:?}", path);
        }
        urls.extend(listed);
    }

    if urls.is_empty() {
        urls.push(config.fetch.default_url.clone());
    }

    let client = ShareClient::with_options(&config.fetch.user_agent, config.fetch.timeout())?;
    let grabber = Grabber::new(
        client,
        super::extraction_config(config, &args.output),
        super::output_settings(config, &args.output),
    );

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.fetch.delay());

    let report = grabber.grab_all(&urls, delay);

    for saved in &report.saved {
        println!("{}", super::describe(saved));
    }
    for (url, err) in &report.failed {
        eprintln!("Failed {}: {}", url, err);
    }

    if !report.is_success() {
        bail!(
            "{} of {} conversation(s) failed",
            report.failed.len(),
            report.total()
        );
    }
    Ok(())
}
