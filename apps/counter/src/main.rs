//! # Dhaba Counter Terminal
//!
//! Line-driven counter surface for Dhaba POS. The touch UI is out of scope
//! for the core; this binary stands in for it so the whole pipeline can be
//! exercised end to end:
//!
//! ```text
//! main.rs ────► loads menu + settings fixtures, runs the clerk loop
//! state/  ────► SelectionState (shared clerk cart)
//! commit  ────► CommitController (snapshot → render → dispatch → reset)
//! catalog ────► CatalogSource / MenuFile
//! settings ───► SettingsSource / SettingsFile
//! print   ────► PrintDispatcher / ConsolePrinter
//! error   ────► CounterError
//! ```
//!
//! ## Clerk Commands
//! - `list` - show the menu with current quantities
//! - `+ N` / `- N` - adjust quantity of menu item N
//! - `t N` - toggle item N (select one / clear)
//! - `bill [cash|electronic]` - print the bill and start the next order
//! - `quit` - exit

mod catalog;
mod commit;
mod error;
mod print;
mod settings;
mod state;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dhaba_core::{CatalogItem, PaymentMode};

use crate::catalog::{CatalogSource, MenuFile};
use crate::commit::CommitController;
use crate::error::CounterError;
use crate::print::ConsolePrinter;
use crate::settings::SettingsFile;
use crate::state::SelectionState;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> Result<(), CounterError> {
    let mut args = std::env::args().skip(1);
    let menu_path = args.next().unwrap_or_else(|| "demos/menu.json".to_string());
    let settings_path = args
        .next()
        .unwrap_or_else(|| "demos/settings.json".to_string());

    let catalog = MenuFile::new(&menu_path).fetch().await?;
    info!(items = catalog.len(), menu = %menu_path, "menu loaded");

    let selection = SelectionState::for_catalog(&catalog);
    let controller = CommitController::new(
        selection.clone(),
        catalog.clone(),
        Arc::new(SettingsFile::new(&settings_path)),
        Arc::new(ConsolePrinter),
    );

    print_help();
    print_menu(&catalog, &selection);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };

        let mut parts = line.split_whitespace();
        match parts.next() {
            None => continue,
            Some("list") => print_menu(&catalog, &selection),
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some("bill") => {
                let mode = match parts.next() {
                    None | Some("cash") => PaymentMode::Cash,
                    Some("electronic") | Some("upi") | Some("card") => PaymentMode::Electronic,
                    Some(other) => {
                        println!("unknown payment mode: {other}");
                        continue;
                    }
                };
                match controller.commit(mode).await {
                    Ok(receipt) => {
                        println!("Bill #{} printed, total {}", receipt.bill_number, receipt.grand_total)
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Some(op @ ("+" | "-" | "t")) => {
                let Some(item) = parts.next().and_then(|token| item_at(&catalog, token)) else {
                    println!("usage: {op} <item number>");
                    continue;
                };
                let outcome = selection.with_cart_mut(|cart| match op {
                    "+" => cart.increment(&item.id),
                    "-" => cart.decrement(&item.id),
                    _ => cart.toggle(&item.id),
                });
                match outcome {
                    Ok(qty) => println!("{} x{qty}", item.name),
                    Err(err) => println!("{err}"),
                }
            }
            Some(other) => println!("unknown command: {other} (try `help`)"),
        }
    }

    Ok(())
}

/// Resolves a 1-based menu number from the clerk loop.
fn item_at<'a>(catalog: &'a [CatalogItem], token: &str) -> Option<&'a CatalogItem> {
    let n: usize = token.parse().ok()?;
    catalog.get(n.checked_sub(1)?)
}

fn print_menu(catalog: &[CatalogItem], selection: &SelectionState) {
    if catalog.is_empty() {
        println!("No products yet");
        return;
    }
    for (n, item) in catalog.iter().enumerate() {
        let qty = selection
            .with_cart(|cart| cart.quantity(&item.id))
            .unwrap_or(0);
        println!("{:>2}. {:<20} {:>9}  x{qty}", n + 1, item.name, item.price().to_string());
    }
}

fn print_help() {
    println!("commands: list | + N | - N | t N | bill [cash|electronic] | quit");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_at_is_one_based() {
        let catalog = vec![
            CatalogItem {
                id: "a".to_string(),
                name: "A".to_string(),
                unit_price_paise: 100,
            },
            CatalogItem {
                id: "b".to_string(),
                name: "B".to_string(),
                unit_price_paise: 200,
            },
        ];

        assert_eq!(item_at(&catalog, "1").map(|i| i.id.as_str()), Some("a"));
        assert_eq!(item_at(&catalog, "2").map(|i| i.id.as_str()), Some("b"));
        assert!(item_at(&catalog, "0").is_none());
        assert!(item_at(&catalog, "3").is_none());
        assert!(item_at(&catalog, "x").is_none());
    }
}
