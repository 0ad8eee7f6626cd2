//! # Catalog Processing
//!
//! Pulls catalog tables (caixas) from the data store and writes the snapshot the backend serves.
//!
//! ## Flow
//! 1. Fetch every requested table, rows come in with whatever column names that table uses.
//!
//! 2. Sanitize names, codes and image paths. Rows without a name are dropped.
//!
//! 3. Report how the rows group by base name so odd names show up before they reach the site.
//!
//! 4. Write all tables into one snapshot, in the order they were requested.
//!
//! ## Notes
//! - A table the data store does not know is skipped, not fatal.
//! - Placeholder codes are kept as is, the backend decides what to show.
use std::path::Path;

use catalog::{
    remote::RemoteStore,
    snapshot::{Snapshot, TableRecord},
    variants::group_by_base_name,
    write_snapshot,
};
use indicatif::{ProgressBar, ProgressStyle};

pub mod models;
pub mod utils;

use models::TableSpec;
use utils::{sanitize_items, timestamp};

pub async fn load_catalog(
    store: &RemoteStore,
    tables: &[TableSpec],
    output: &Path,
) -> anyhow::Result<()> {
    let pb = ProgressBar::new(tables.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );

    let mut records = Vec::new();
    let mut total_items = 0;

    for spec in tables {
        pb.set_message(format!("Fetching {}", spec.name));

        let Some(items) = store.fetch_table(&spec.name).await? else {
            println!("\n\nTable {} not found, skipping", spec.name);
            pb.inc(1);
            continue;
        };

        let fetched = items.len();
        let items = sanitize_items(items);
        let groups = group_by_base_name(&items);

        println!("\n\n{} ({})", spec.title, spec.name);
        println!("Items: {} ({} dropped)", items.len(), fetched - items.len());
        println!(
            "Groups: {} ({} with variants)\n",
            groups.len(),
            groups.iter().filter(|group| group.is_grouped).count()
        );

        total_items += items.len();
        records.push(TableRecord::new(&spec.name, &spec.title, &items));

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let snapshot = Snapshot {
        generated_at: timestamp(),
        tables: records,
    };
    write_snapshot(output, &snapshot)?;

    println!("Total Tables: {}", snapshot.tables.len());
    println!("Total Items: {}", total_items);
    println!("Snapshot written to {}", output.display());

    Ok(())
}
