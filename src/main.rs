//! LiftLog - Strength Training Log
//!
//! Prints the planning view for a month: attendance, cost per session,
//! push/pull/legs counts and the calendar.
//!
//! Usage: `liftlog [YYYY-MM]`

use anyhow::Context;
use liftlog::storage::config::load_config;
use liftlog::{Category, Database, Tracker, YearMonth};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LiftLog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("loading configuration")?;
    let db_path = config.database_path();
    let db = Database::open(&db_path)
        .with_context(|| format!("opening database at {}", db_path.display()))?;

    let tracker = Tracker::new(db, config.planning.clone());

    let month = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<YearMonth>()?,
        None => tracker.current_month(),
    };

    let summary = tracker.stats().month_summary(month)?;
    let currency = &tracker.settings().currency;

    println!("Planning {}", summary.month);
    println!("  Gym days this month: {}", summary.monthly_count);
    println!(
        "  Cost / session:      {} ({:.2}{} / month)",
        summary.cost_label(currency),
        summary.monthly_fee,
        currency
    );
    println!("  Gym days this year:  {}", summary.yearly_count);
    let split: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", c, summary.categories.get(*c)))
        .collect();
    println!("  {}", split.join(" | "));
    println!();
    print!("{}", tracker.calendar(month, None)?);

    let details = tracker.day_details();
    for date in tracker.hit_dates()?.into_iter().filter(|d| month.contains(*d)) {
        println!();
        println!("{date}");
        for entry in details.details_for(date)? {
            println!(
                "  {}  {} ({})",
                entry.logged_time(),
                entry.template_name,
                entry.category_label()
            );
        }
    }

    Ok(())
}
