//! # ge-nexus — server binary
//!
//! ## Environment Variables
//!
//! | Variable                 | Default                    | Description                     |
//! |--------------------------|----------------------------|---------------------------------|
//! | `BIND_ADDR`              | `0.0.0.0:3000`             | Address Axum listens on         |
//! | `OSRS_CATALOGUE_URL`     | official catalogue API     | Items, details, graphs          |
//! | `OSRS_WIKI_PRICES_URL`   | wiki real-time prices API  | `/mapping`, `/latest`           |
//! | `WEIRD_GLOOP_LATEST_URL` | Weird Gloop `/latest`      | Herblore prices                 |
//! | `UPSTREAM_TIMEOUT_SECS`  | `10`                       | Per upstream request            |
//! | `UPSTREAM_USER_AGENT`    | `ge-nexus/<version>`       | Sent on every upstream call     |
//! | `RUST_LOG`               | `ge_nexus=debug`           | Tracing filter                  |

use ge_nexus::{build_router, config::Config, state::build_state};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ─── Entry Point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional — CI/prod can use real env vars) ──────────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env()
            .add_directive("ge_nexus=debug".parse()?)
            .add_directive("tower_http=info".parse()?))
        .init();

    info!(
        r#"

  ╔═══════════════════════════════════════════════╗
  ║        GE NEXUS — Grand Exchange Proxy        ║
  ║        Rust + Axum  ·  Flips & Profits        ║
  ╚═══════════════════════════════════════════════╝"#
    );

    // ── 3. Config + shared state ─────────────────────────────────────────────
    let config = Config::from_env()?;
    let addr = config.bind_addr;
    let state = build_state(config)?;

    let urls = state.upstream.urls();
    info!(
        catalogue   = %urls.catalogue,
        wiki_prices = %urls.wiki_prices,
        gloop       = %urls.gloop_latest,
        timeout     = ?state.config.upstream_timeout,
        "Upstreams configured"
    );

    // ── 4. Router ────────────────────────────────────────────────────────────
    let app = build_router(state);

    info!(?addr, "🚀 GE Nexus server starting");

    // ── 5. Start the server ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
