use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{render, store};

pub fn run(plan_path: &Path) -> Result<()> {
    let records = store::load_plan(plan_path)?;

    for warning in store::validation_warnings(&records) {
        eprintln!("{}", format!("warning: {}", warning).yellow());
    }

    println!("{}", render::render_plan(&records));
    println!();
    println!("{}", render::readiness(&records));

    Ok(())
}
