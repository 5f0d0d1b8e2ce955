//! Preview binary - prints the localized catalog listings in the terminal
//!
//! Usage:
//!   cargo run                    # Restored (or default) language
//!   cargo run -- en              # Switch to English, remembered for next run
//!   cargo run -- es iso          # Spanish, shop search for "iso"
//!
//! Optional environment variables:
//! - AJ_PREFERENCES_FILE (defaults to .aj-preferences.json)
//! - AJ_CATEGORY_POLICY (keep, reset or remap; defaults to remap)
//! - AJ_MAX_PRICE (defaults to 2000)

use aigle_jurassien::config::Config;
use aigle_jurassien::i18n::{content_for, ContentValidator};
use aigle_jurassien::sections::{AcademySection, ShopSection};
use aigle_jurassien::storage::FilePreferences;
use aigle_jurassien::store::LocalizationStore;
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aigle_jurassien=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Using preferences file {}", config.preferences_file.display());

    let report = ContentValidator::validate_all();
    for warning in &report.warnings {
        warn!("Content: {}", warning);
    }
    if report.has_errors() {
        anyhow::bail!("Content is inconsistent:\n  {}", report.errors.join("\n  "));
    }

    let mut store = LocalizationStore::new(FilePreferences::new(&config.preferences_file));
    let restored = store.restore();
    info!("Active language: {} ({})", restored.native_name(), restored);

    let academy = Rc::new(RefCell::new(AcademySection::new()));
    let shop = Rc::new(RefCell::new(ShopSection::with_max_price(config.max_price)));

    // Sections follow language changes through the store
    {
        let academy = Rc::clone(&academy);
        let shop = Rc::clone(&shop);
        let policy = config.category_policy;
        store.subscribe(move |change| {
            let previous = content_for(change.previous);
            let current = content_for(change.current);
            academy.borrow_mut().on_language_change(previous, current, policy);
            shop.borrow_mut().on_language_change(previous, current, policy);
        });
    }

    let mut args = std::env::args().skip(1);
    if let Some(code) = args.next() {
        store
            .set_active_language_code(&code)
            .with_context(|| format!("Cannot switch to '{}'", code))?;
    }
    if let Some(query) = args.next() {
        shop.borrow_mut().set_search(query);
    }

    let content = store.content();
    let document = store.document();

    println!("\n{}", "=".repeat(60));
    println!("lang=\"{}\" dir=\"{}\"", document.lang, document.dir);
    println!("{}", "=".repeat(60));

    let academy_view = academy.borrow().view(content);
    println!("\n## {}\n", academy_view.title);
    let filters: Vec<&str> = academy_view.options.iter().map(|o| o.label).collect();
    println!("[{}]", filters.join(" | "));
    for course in academy_view.courses.items() {
        println!(
            "- {} ({}) {} {}",
            course.title,
            course.category,
            course.rating_label(),
            "★".repeat(course.star_count() as usize)
        );
    }

    let shop_view = shop.borrow().view(content);
    println!("\n## {}\n", shop_view.title);
    println!("{}", shop_view.max_price_label);
    if shop_view.products.is_empty() {
        println!("{}", shop_view.empty_state);
    }
    for product in shop_view.products.items() {
        println!("- {} ({}) {}", product.title, product.category, product.price_label());
    }

    println!("\n{}", content.footer.bottom_line(Local::now().year()));

    info!("Metrics: {:?}", store.metrics().report());
    Ok(())
}
