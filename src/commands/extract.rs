//! Extract command handler

use std::fs;

use anyhow::{Context, Result};

use chatgrab::cli::ExtractArgs;
use chatgrab::{extract, transcript, Config, Grabber};

/// Extract a transcript from a saved share page.
pub fn handle(args: ExtractArgs, config: &Config) -> Result<()> {
    let markup = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read page: {:?}", args.file))?;
    let extraction_config = super::extraction_config(config, &args.output);

    if args.stdout {
        let extraction = extract(&markup, &extraction_config)?;
        print!("{}", transcript::to_json(&extraction.turns)?);
        return Ok(());
    }

    let id = match &args.id {
        Some(id) => id.clone(),
        None => args
            .file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .with_context(|| format!("Cannot derive conversation id from {:?}", args.file))?,
    };

    let grabber = Grabber::offline(extraction_config, super::output_settings(config, &args.output));
    let source = args.file.display().to_string();
    let saved = grabber.grab_markup(&source, &id, &markup)?;
    println!("{}", super::describe(&saved));
    Ok(())
}
