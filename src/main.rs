use std::fs;
use std::path::PathBuf;
use channel_snapshot::leaderboard::render_leaderboard;
use channel_snapshot::{ChannelSnapshot, Config, YouTubeError};
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(about = "Fetch YouTube channel statistics and export them as JSON")]
struct Args {
    /// Channel ids, e.g. UCBR8-60-B28hp2BmDPdntcQ
    #[arg(required = true)]
    channel_ids: Vec<String>,

    /// Directory to write one <id>.json file per channel into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print each snapshot as JSON
    #[arg(long, default_value_t = false)]
    print: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), YouTubeError> {
    let args = Args::parse();

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = Config::from_env()?;
    let client = reqwest::Client::new();

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut channels = Vec::with_capacity(args.channel_ids.len());
    for channel_id in &args.channel_ids {
        let channel = ChannelSnapshot::fetch(&client, &config, channel_id).await?;
        tracing::info!(channel_id = %channel_id, subscribers = channel.subscriber_count(), "fetched channel");

        println!("{}", channel);
        println!(
            "  subscribers: {}, videos: {}, views: {}",
            channel.subscriber_count(),
            channel.video_count(),
            channel.view_count(),
        );

        if args.print {
            println!("{}", channel.to_json_string()?);
        }

        if let Some(dir) = &args.output_dir {
            let path = dir.join(format!("{}.json", channel.id()));
            channel.export_json(&path)?;
            tracing::info!(path = %path.display(), "exported channel");
        }

        channels.push(channel);
    }

    if channels.len() > 1 {
        println!("{}", render_leaderboard(&channels));
    }

    Ok(())
}
