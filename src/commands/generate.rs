use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use postplan_core::config::GlobalConfig;
use postplan_core::plan::{generate, start_of_week};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{resolve_platforms, resolve_tone};
use crate::{render, store};

pub fn run(
    start: Option<String>,
    platforms: Vec<String>,
    posts_per_week: Option<u8>,
    tone: Option<String>,
    seed: Option<u64>,
    plan_path: &Path,
) -> Result<()> {
    let config = GlobalConfig::load()?;

    // The week always runs Monday to Sunday; any date picks its week.
    let week_start = match start {
        Some(s) => {
            let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))?;
            start_of_week(date)
        }
        None => start_of_week(Local::now().date_naive()),
    };

    let platform_names = if platforms.is_empty() {
        config.platforms.clone()
    } else {
        platforms
    };
    let platforms = resolve_platforms(&platform_names)?;
    if platforms.is_empty() {
        anyhow::bail!("No platforms selected");
    }

    let tone = resolve_tone(tone.as_deref().unwrap_or(&config.tone))?;
    let posts_per_week = posts_per_week.unwrap_or(config.posts_per_week);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let records = generate(week_start, &platforms, posts_per_week, tone, &mut rng);
    store::save_plan(plan_path, &records)?;

    println!("{}", render::render_plan(&records));
    println!();
    println!("{}", render::readiness(&records));
    println!(
        "{}",
        format!(
            "Created: {} ({} posts, week of {})",
            plan_path.display(),
            records.len(),
            week_start
        )
        .green()
    );

    Ok(())
}
