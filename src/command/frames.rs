//! Dump the raw frames of one spinner.

use anyhow::Result;
use serde::Serialize;

use braille_spinners::{Spinner, SpinnerName, spinner};

#[derive(Serialize)]
struct SpinnerRecord<'a> {
    name: SpinnerName,
    #[serde(flatten)]
    spinner: &'a Spinner,
}

fn render(name: SpinnerName, json: bool) -> Result<String> {
    let spinner = spinner(name);
    if json {
        Ok(serde_json::to_string_pretty(&SpinnerRecord { name, spinner })?)
    } else {
        Ok(spinner.frames().join("\n"))
    }
}

pub fn run(name: SpinnerName, json: bool) -> Result<()> {
    println!("{}", render(name, json)?);
    Ok(())
}
