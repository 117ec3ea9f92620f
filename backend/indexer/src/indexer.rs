//! Long-running background task that polls the Soroban RPC and writes
//! decoded procurement registry events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Where the next poll starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Position {
    ledger: u32,
    cursor: Option<String>,
}

/// Run the indexer loop forever; spawned as a background [`tokio`] task.
pub async fn run(state: Arc<IndexerState>) {
    info!("Indexer starting, contract: {}", state.config.contract_id);

    let (last_ledger, cursor) = db::load_cursor(&state.pool).await.unwrap_or((0, None));
    let mut position = Position {
        ledger: if last_ledger > 0 {
            last_ledger as u32
        } else {
            state.config.start_ledger
        },
        cursor,
    };

    info!("Resuming from ledger {}", position.ledger);

    loop {
        match poll_once(&state, &position).await {
            Ok(next) => position = next,
            Err(e) => error!("Indexer poll error: {e}"),
        }

        tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)).await;
    }
}

/// Perform a single poll iteration and return the next position.
async fn poll_once(state: &IndexerState, position: &Position) -> Result<Position> {
    let config = &state.config;
    let page = rpc::fetch_events(
        &state.client,
        &config.rpc_url,
        &config.contract_id,
        position.ledger,
        position.cursor.as_deref(),
        config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &config.contract_id);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    let next = advance(position.ledger, page.latest_ledger, page.cursor);

    // Persist so restarts resume from the same place.
    db::save_cursor(&state.pool, i64::from(next.ledger), next.cursor.as_deref()).await?;

    Ok(next)
}

/// The ledger never moves backwards; a returned cursor is carried so the next
/// call continues paginating.
fn advance(start_ledger: u32, latest_ledger: Option<u64>, cursor: Option<String>) -> Position {
    let ledger = latest_ledger
        .map(|l| u32::try_from(l).unwrap_or(u32::MAX).max(start_ledger))
        .unwrap_or(start_ledger);
    Position { ledger, cursor }
}
