//! Fleet fuel dashboard for the [Navixy](https://www.navixy.com/) telemetry API.
//!
//! Fetches the tracker list, enriches every tracker with its fuel sensor reading
//! and renders the result as a single HTML page.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use structopt::StructOpt;

use crate::core::enrichment;
use crate::opts::Opts;
use crate::prelude::*;
use crate::services::navixy::Navixy;

mod core;
mod format;
mod logging;
mod opts;
mod prelude;
mod services;
mod settings;
mod templates;

#[async_std::main]
async fn main() -> Result {
    let opts = Opts::from_args();
    logging::init(&opts)?;

    info!("Reading settings from {}…", opts.settings.display());
    let settings = settings::read(&opts.settings)?;
    let api = Navixy::new(
        settings.api_url.clone(),
        settings.hash(opts.hash.as_deref())?,
        settings.timeout(),
    );

    let result = enrichment::load(&api, &settings.fuel_sensor_label).await;

    if opts.dump_json {
        let dashboard = result?;
        return write_output(opts.output.as_deref(), &serde_json::to_string_pretty(&dashboard)?);
    }

    let (page, result) = match result {
        Ok(dashboard) => (Page::Loaded(dashboard), Ok(())),
        Err(error) => (Page::Failed(format!("{:#}", error)), Err(error)),
    };
    write_output(opts.output.as_deref(), &templates::render(&page, Local::now()))?;
    result
}

/// Writes the contents to the file, or to stdout when no file is specified.
fn write_output(path: Option<&Path>, contents: &str) -> Result {
    match path {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
            info!("Written {}.", path.display());
        }
        None => io::stdout().lock().write_all(contents.as_bytes())?,
    }
    Ok(())
}
