//! Debug script to dump the extracted listing for one channel
//!
//! Usage: cargo run --example dump_channel -- <CHANNEL_ID>

use ytchannel_core::ChannelScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let channel_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string());

    let scraper = ChannelScraper::new()?;
    let result = scraper.channel_videos(&channel_id, 20).await?;

    println!(
        "{} ({} videos)",
        result.channel_name.as_deref().unwrap_or("<no channel name>"),
        result.videos.len()
    );
    for video in &result.videos {
        println!(
            "  {} [{}] {} - {}",
            video.video_id, video.duration, video.title, video.view_count
        );
    }
    if let Some(token) = &result.continuation_token {
        println!("continuation token: {}...", &token[..token.len().min(40)]);
    }

    Ok(())
}
