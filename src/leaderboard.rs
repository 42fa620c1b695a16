use crate::models::ChannelSnapshot;

/// Ranks channels by subscribers, highest first. Ties keep their input order.
pub fn rank_by_subscribers(channels: &[ChannelSnapshot]) -> Vec<&ChannelSnapshot> {
    let mut ranked: Vec<&ChannelSnapshot> = channels.iter().collect();
    ranked.sort_by(|a, b| b.compare_by_subscribers(a));
    ranked
}

/// One line per channel with its lead over the next entry, then the combined total.
pub fn render_leaderboard(channels: &[ChannelSnapshot]) -> String {
    let ranked = rank_by_subscribers(channels);

    let mut lines = vec!["Leaderboard:".to_string()];
    for (position, channel) in ranked.iter().enumerate() {
        let line = match ranked.get(position + 1) {
            Some(next) => format!(
                "{:>3}. {} - {} subscribers (+{} over next)",
                position + 1,
                channel,
                channel.subscriber_count(),
                channel.subscriber_delta(next),
            ),
            None => format!(
                "{:>3}. {} - {} subscribers",
                position + 1,
                channel,
                channel.subscriber_count(),
            ),
        };
        lines.push(line);
    }

    let total = ranked
        .iter()
        .map(|channel| channel.subscriber_count())
        .fold(0i64, i64::saturating_add);
    lines.push(format!("Combined subscribers: {}", total));

    lines.join("\n")
}
