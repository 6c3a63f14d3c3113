//! # Nexus Terminal — GE Nexus command-line client
//!
//! One command per invocation:
//!
//! ```text
//!   argv ──▶ cli::parse ──▶ settings file + flag overrides
//!                              │
//!                              ▼
//!                        NexusClient (GET /api/*) ──▶ views (search/sort/totals)
//!                                                         │
//!                                                         ▼
//!                                                   render (table | CSV) ──▶ stdout
//! ```

use anyhow::Context;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod categories;
mod cli;
mod config;
mod favorites;
mod render;
mod settings;
mod views;

use api::NexusClient;
use cli::{Command, FavAction, Flags};
use config::Config;
use favorites::FavoritesStore;
use settings::Settings;
use views::{Row, SortState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env()
            .add_directive("nexus_terminal=info".parse()?)
            .add_directive("reqwest=warn".parse()?))
        .init();

    let (command, flags) = cli::parse(std::env::args().skip(1))?;
    let config = Config::from_env().context("Failed to load config")?;

    debug!(api = %config.api_url, ?command, "Nexus terminal started");

    if let Err(e) = run(command, flags, &config).await {
        error!(error = %e, "❌ Command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, flags: Flags, config: &Config) -> anyhow::Result<()> {
    // Help never depends on settings, so a bad override must not block it.
    if command == Command::Help {
        print!("{}", cli::HELP);
        return Ok(());
    }

    let mut settings = Settings::load(&config.settings_path);
    for (key, value) in &flags.overrides {
        settings.set(key, value)?;
    }

    let client = NexusClient::new(reqwest::Client::new(), config.api_url.clone());

    match command {
        // printed before the settings load
        Command::Help => {}

        Command::Health => {
            let health = client.health().await.context("Health check failed")?;
            println!(
                "{} — v{}, up {}s (since {})",
                health.status,
                health.version,
                health.uptime_secs,
                health.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            );
        }

        Command::Categories => {
            for (id, name) in categories::CATEGORIES {
                println!("{id:>3}  {name}");
            }
            println!("\n(OSRS has one catalogue; browse with `items --alpha <letter>`)");
        }

        Command::Items => show_items(&client, &flags, config).await?,

        Command::Item(id) => {
            let (detail, graph) = tokio::try_join!(client.item_detail(id), client.graph(id))
                .with_context(|| format!("Failed to load item {id}"))?;
            let favorites = FavoritesStore::load(&config.favorites_path);
            print!("{}", render::item_detail(&detail.item, &graph, favorites.contains(id)));
        }

        Command::Flip => {
            let rows = client
                .flip_opportunities(&settings)
                .await
                .context("Failed to load flip opportunities")?;
            let rows = apply_view(rows, &flags)?;
            if flags.csv {
                print!("{}", render::flips_csv(&rows));
            } else {
                print!("{}", render::flips_table(&rows));
                println!("{} opportunities", rows.len());
            }
        }

        Command::Herblore => {
            let rows = client
                .herblore_profits()
                .await
                .context("Failed to load herblore profits")?;
            let rows = apply_view(rows, &flags)?;
            if flags.csv {
                print!("{}", render::herbs_csv(&rows));
            } else {
                print!("{}", render::herbs_table(&rows));
                let totals = views::batch_totals(&rows, settings.batch_quantity);
                println!("{}", render::batch_line(&totals, settings.batch_quantity));
            }
        }

        Command::Skill(skill) => {
            let rows = client
                .skill_profits(skill)
                .await
                .with_context(|| format!("Failed to load {skill} profits"))?;
            let rows = apply_view(rows, &flags)?;
            if flags.csv {
                print!("{}", render::skills_csv(&rows));
            } else {
                print!("{}", render::skills_table(&rows));
                let totals = views::batch_totals(&rows, settings.batch_quantity);
                println!("{}", render::batch_line(&totals, settings.batch_quantity));
            }
        }

        Command::Favorites(action) => {
            let mut store = FavoritesStore::load(&config.favorites_path);
            match action {
                FavAction::List => {
                    if store.list().is_empty() {
                        println!("No favorites yet.");
                    } else {
                        let items = client.favorite_items(store.list()).await;
                        print!("{}", render::items_table(&items, store.list()));
                        let missing = store.list().len() - items.len();
                        if missing > 0 {
                            println!("({missing} favorite(s) could not be loaded)");
                        }
                    }
                }
                FavAction::Add(id) => {
                    let added = store.add(id)?;
                    println!("{}", if added { "Added" } else { "Already a favorite" });
                }
                FavAction::Remove(id) => {
                    let removed = store.remove(id)?;
                    println!("{}", if removed { "Removed" } else { "Not a favorite" });
                }
                FavAction::Toggle(id) => {
                    let now = store.toggle(id)?;
                    println!("{id} is {}a favorite", if now { "now " } else { "no longer " });
                }
            }
        }

        Command::ShowSettings => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }

        Command::SetSetting { key, value } => {
            // Saved from the file state so one-off flags are not persisted.
            let mut saved = Settings::load(&config.settings_path);
            saved.set(&key, &value)?;
            saved.save(&config.settings_path)?;
            println!("{key} = {value}");
        }
    }

    Ok(())
}

/// Search, then sort if `--sort` was given (server order otherwise).
fn apply_view<R: Row + Clone>(rows: Vec<R>, flags: &Flags) -> anyhow::Result<Vec<R>> {
    let mut rows = match &flags.search {
        Some(query) => views::search(&rows, query),
        None => rows,
    };

    if let Some(key) = &flags.sort {
        views::validate_sort_key::<R>(key).map_err(anyhow::Error::msg)?;
        let mut sort = SortState::new(key.as_str());
        if flags.asc {
            sort.select(key);
        }
        views::sort_rows(&mut rows, &sort);
    }
    Ok(rows)
}

async fn show_items(client: &NexusClient, flags: &Flags, config: &Config) -> anyhow::Result<()> {
    let alpha = flags.alpha.to_lowercase();

    let category = client
        .category(categories::OSRS_SINGLE_CATEGORY_ID)
        .await
        .context("Failed to load category")?;
    let bucket = category.alpha.iter().find(|a| a.letter.eq_ignore_ascii_case(&alpha));
    let total_pages = views::total_pages(bucket.map_or(0, |a| a.items));
    let page = views::clamp_page(flags.page, total_pages);

    let items = client
        .items(categories::OSRS_SINGLE_CATEGORY_ID, &alpha, page)
        .await
        .context("Failed to load items")?;

    let mut shown = items.items;
    if let Some(query) = &flags.search {
        let needle = query.to_lowercase();
        shown.retain(|i| i.name.to_lowercase().contains(&needle));
    }

    let favorites = FavoritesStore::load(&config.favorites_path);
    print!("{}", render::items_table(&shown, favorites.list()));
    println!(
        "'{alpha}' page {page}/{total_pages}  (prev: {}, next: {})",
        views::prev_page(page, total_pages),
        views::next_page(page, total_pages),
    );
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
