//! URL classification command.

use console::style;

use crate::media::{classify, extract_id, render, ContentType, MediaRecord, RenderMode, ViewNode};

/// Print the content type and rendering strategy for each URL.
pub fn cmd_classify(urls: &[String], json: bool) -> anyhow::Result<()> {
    let results: Vec<serde_json::Value> = urls
        .iter()
        .map(|url| {
            let content_type = classify(url);
            let youtube_id = match content_type {
                ContentType::Youtube => extract_id(url),
                _ => None,
            };
            serde_json::json!({
                "url": url,
                "content_type": content_type,
                "youtube_id": youtube_id,
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for url in urls {
        let record = MediaRecord::new("", "", url.as_str());
        let content_type = record.content_type();
        let strategy = describe(&render(&record, RenderMode::Detail));
        println!(
            "{:<8} {}  {}",
            style(content_type.id()).cyan(),
            url,
            style(strategy).dim()
        );
    }

    Ok(())
}

/// One-line description of a rendering strategy.
fn describe(view: &ViewNode) -> String {
    match view {
        ViewNode::Image { .. } => "image element".to_string(),
        ViewNode::Video { mime, .. } => format!("video player ({})", mime),
        ViewNode::Youtube { video_id, .. } => format!("YouTube player, id {}", video_id),
        ViewNode::InvalidYoutube => "invalid YouTube video ID".to_string(),
        ViewNode::Link { .. } => "outbound link".to_string(),
    }
}
