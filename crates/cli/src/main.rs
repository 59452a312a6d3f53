//! Console frontend for the inventory engine.
//!
//! Deliberately thin presentation: every command invokes one engine
//! operation, then the loop drains its change subscription and re-renders
//! from `snapshot()`/`alerts()`. The engine never sees the input buffer;
//! it is cleared here, once per read.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use uuid::Uuid;

use shelftrack_alerts::{AlertId, AlertKind};
use shelftrack_core::TagUid;
use shelftrack_engine::{EngineEvent, InventoryEngine, ScanOutcome};
use shelftrack_events::{Event, Subscription};
use shelftrack_inventory::{Item, RestockResult, TakeResult};

/// The demo catalog: four products with known tag uids.
fn demo_catalog() -> Result<Vec<Item>> {
    Ok(vec![
        Item::new(TagUid::new("1A2B3C4D")?, "Smartwatch Pro", 5, 2)?,
        Item::new(TagUid::new("5E6F7G8H")?, "Wireless Earbuds", 10, 3)?,
        Item::new(TagUid::new("9I0J1K2L")?, "Portable Charger", 3, 1)?,
        Item::new(TagUid::new("3M4N5O6P")?, "Bluetooth Speaker", 1, 2)?,
    ])
}

fn main() -> Result<()> {
    shelftrack_observability::init();

    let mut engine =
        InventoryEngine::new(demo_catalog()?).context("failed to provision demo catalog")?;
    let sub = engine.subscribe();

    tracing::info!("shelftrack console started");
    println!("shelftrack — scan tags like 1A2B3C4D; 'help' lists commands");
    render_items(&engine);
    render_alerts(&engine);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next().unwrap_or("");

        match command {
            "scan" => {
                report_scan(engine.resolve_scan(arg));
                refresh(&engine, &sub);
            }
            "take" => {
                match TagUid::new(arg) {
                    Ok(uid) => report_take(&uid, engine.take(&uid)),
                    Err(err) => println!("{err}"),
                }
                refresh(&engine, &sub);
            }
            "restock" => {
                match TagUid::new(arg) {
                    Ok(uid) => report_restock(&uid, engine.restock(&uid)),
                    Err(err) => println!("{err}"),
                }
                refresh(&engine, &sub);
            }
            "dismiss" => {
                match parse_alert_id(arg) {
                    Some(id) if engine.dismiss_alert(&id) => println!("dismissed {id}"),
                    Some(id) => println!("nothing to dismiss for {id} (low-stock alerts clear themselves)"),
                    None => println!("dismiss expects an alert id"),
                }
                refresh(&engine, &sub);
            }
            "list" => render_items(&engine),
            "alerts" => render_alerts(&engine),
            "json" => println!("{}", serde_json::to_string_pretty(engine.snapshot())?),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}'; try 'help'"),
        }
    }

    Ok(())
}

/// Drain pending change events, then re-render the alert list.
fn refresh(engine: &InventoryEngine, sub: &Subscription<EngineEvent>) {
    while let Ok(event) = sub.try_recv() {
        println!("  · {}", event.event_type());
    }
    render_alerts(engine);
}

fn report_scan(outcome: ScanOutcome) {
    match outcome {
        ScanOutcome::Ignored => println!("(empty scan ignored)"),
        ScanOutcome::Taken { name, take, .. } => match take {
            TakeResult::Taken { remaining } => println!("took one {name}; {remaining} left"),
            _ => println!("{name} detected, but shelf is empty"),
        },
        ScanOutcome::Unknown { uid } => println!("no product matches {uid}"),
    }
}

fn report_take(uid: &TagUid, result: TakeResult) {
    match result {
        TakeResult::Taken { remaining } => println!("took one {uid}; {remaining} left"),
        TakeResult::OutOfStock => println!("{uid} is out of stock"),
        TakeResult::NotFound => println!("no product matches {uid}"),
    }
}

fn report_restock(uid: &TagUid, result: RestockResult) {
    match result {
        RestockResult::Restocked { level } => println!("restocked {uid}; now {level}"),
        RestockResult::NotFound => println!("no product matches {uid}"),
    }
}

/// Transient alert ids are uuids; anything else is treated as an item uid
/// (which the engine refuses to dismiss).
fn parse_alert_id(raw: &str) -> Option<AlertId> {
    if let Ok(id) = Uuid::from_str(raw) {
        return Some(AlertId::Scan(id));
    }
    TagUid::new(raw).ok().map(AlertId::Item)
}

fn render_items(engine: &InventoryEngine) {
    println!("  {:<10} {:<20} {:>5} {:>4}", "UID", "NAME", "STOCK", "MIN");
    for item in engine.snapshot() {
        println!(
            "  {:<10} {:<20} {:>5} {:>4}",
            item.uid().as_str(),
            item.name(),
            item.stock(),
            item.min_stock()
        );
    }
}

fn render_alerts(engine: &InventoryEngine) {
    let alerts = engine.alerts();
    if alerts.is_empty() {
        println!("  no alerts");
        return;
    }
    for alert in alerts {
        let tag = match alert.kind {
            AlertKind::LowStock => "warn",
            AlertKind::ScanSuccess => "info",
            AlertKind::ScanError => "error",
        };
        println!("  [{tag}] {} ({})", alert.message, alert.id);
    }
}

fn print_help() {
    println!("commands:");
    println!("  scan <uid>      simulate an RFID read (trims + uppercases)");
    println!("  take <uid>      take one unit off the shelf");
    println!("  restock <uid>   put one unit back");
    println!("  dismiss <id>    dismiss a transient alert by id");
    println!("  list            show the catalog");
    println!("  alerts          show current alerts");
    println!("  json            dump the catalog snapshot as JSON");
    println!("  quit            leave");
}
