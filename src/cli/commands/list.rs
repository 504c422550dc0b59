//! Media listing command.

use console::style;

use super::helpers::truncate;
use crate::collection::{HttpCollection, MediaCollection};
use crate::config::Settings;
use crate::media::{decode_html_entities, filter_records, ClassifiedRecord};

/// List stored records with their derived content types.
pub async fn cmd_list(settings: &Settings, query: &str, json: bool) -> anyhow::Result<()> {
    let collection = HttpCollection::from_settings(settings)?;
    let records = collection.list().await?;
    let matching = filter_records(&records, query);

    if json {
        let urls: Vec<ClassifiedRecord> = matching.into_iter().map(ClassifiedRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "urls": urls }))?);
        return Ok(());
    }

    if matching.is_empty() {
        if records.is_empty() {
            println!("{} No media stored yet.", style("!").yellow());
        } else {
            println!("{} No titles match '{}'.", style("!").yellow(), query);
        }
        return Ok(());
    }

    println!("\n{}", style(&settings.site_title).bold());
    println!("{}", "-".repeat(100));
    println!("{:<26} {:<8} {:<32} URL", "ID", "Type", "Title");
    println!("{}", "-".repeat(100));

    for record in &matching {
        println!(
            "{:<26} {:<8} {:<32} {}",
            truncate(&record.id, 25),
            record.content_type().display_name(),
            truncate(&decode_html_entities(&record.title), 31),
            record.url
        );
    }

    println!(
        "\n{} of {} records shown",
        style(matching.len()).cyan(),
        records.len()
    );

    Ok(())
}
