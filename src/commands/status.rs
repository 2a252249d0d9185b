//! Status command implementation.
//!
//! Fetches one snapshot, classifies every row, and renders the nested status
//! map plus one line per entity, as text or JSON.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use hastatus::{classify_table, fetch_snapshot, parse_stat_table, statuses, EntityKind, StatusEntity, StatusMap};

/// Flattened, serialization-friendly view of one entity.
#[derive(Serialize)]
struct EntityView<'a> {
    proxy: &'a str,
    name: &'a str,
    kind: EntityKind,
    status: &'a str,
    active: &'a str,
    health_code: i8,
    is_server: bool,
    is_active: bool,
}

impl<'a> From<&'a StatusEntity> for EntityView<'a> {
    fn from(e: &'a StatusEntity) -> Self {
        Self {
            proxy: &e.proxy,
            name: &e.name,
            kind: e.kind,
            status: &e.status,
            active: &e.active,
            health_code: e.health().code(),
            is_server: e.is_server(),
            is_active: e.is_active(),
        }
    }
}

#[derive(Serialize)]
struct StatusReport<'a> {
    statuses: &'a StatusMap,
    entities: Vec<EntityView<'a>>,
}

/// Fetches and renders one status snapshot.
pub fn command_status(
    config: &Config,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let blob = fetch_snapshot(&config.socket_path(), config.timeout())?;
    let table = parse_stat_table(&blob)?;
    let entities = classify_table(&table)?;
    let map = statuses(&entities);

    match format {
        OutputFormat::Json => {
            let report = StatusReport {
                statuses: &map,
                entities: entities.iter().map(EntityView::from).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => render_text(&entities, &map),
    }

    Ok(())
}

/// Plain-text rendering: status map first, then one line per entity.
/// Map keys are sorted for stable output; entities keep source order.
fn render_text(entities: &[StatusEntity], map: &StatusMap) {
    println!("Statuses:");
    let mut proxies: Vec<&String> = map.keys().collect();
    proxies.sort();
    for proxy in proxies {
        println!("  {proxy}:");
        let members = &map[proxy];
        let mut names: Vec<&String> = members.keys().collect();
        names.sort();
        for name in names {
            println!("    {name}: {}", members[name]);
        }
    }

    println!();
    println!("Entities:");
    for e in entities {
        println!(
            "  {} / {} [{}] status={:?} health={} active={}",
            e.proxy,
            e.name,
            e.kind,
            e.status,
            e.health().code(),
            e.is_active()
        );
    }
}
