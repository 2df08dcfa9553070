//! Scheduled daily verse: one random verse per run, delivered to every subscriber.

use std::sync::Arc;

use bible_corpus::{Corpus, SamplingMode};
use bot_core::{Bot, Chat};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

use crate::config::DailySchedule;
use crate::format::format_daily_verse;
use crate::subscribers::SubscriberSet;

/// Upper bound on sends in flight during one broadcast; Telegram rejects bursts above ~30 msg/s.
pub const MAX_CONCURRENT_SENDS: usize = 20;

/// Outcome of one broadcast run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub failed: usize,
    /// Chats removed because the bot can no longer reach them (also counted in `failed`).
    pub unsubscribed: Vec<i64>,
}

pub struct DailyBroadcaster {
    bot: Arc<dyn Bot>,
    corpus: Arc<Corpus>,
    subscribers: Arc<SubscriberSet>,
    sampling: SamplingMode,
    max_in_flight: usize,
}

impl DailyBroadcaster {
    pub fn new(
        bot: Arc<dyn Bot>,
        corpus: Arc<Corpus>,
        subscribers: Arc<SubscriberSet>,
        sampling: SamplingMode,
    ) -> Self {
        Self {
            bot,
            corpus,
            subscribers,
            sampling,
            max_in_flight: MAX_CONCURRENT_SENDS,
        }
    }

    /// Overrides the send concurrency cap (minimum 1).
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Picks a verse and sends it to all current subscribers.
    pub async fn broadcast_once(&self) -> BroadcastReport {
        let text = {
            let mut rng = rand::thread_rng();
            format_daily_verse(&self.corpus.random_verse(self.sampling, &mut rng))
        };
        self.broadcast_text(&text).await
    }

    /// Sends `text` to every subscriber, at most `max_in_flight` at a time. A failed send never
    /// stops the others; unreachable chats are unsubscribed.
    #[instrument(skip(self, text))]
    pub async fn broadcast_text(&self, text: &str) -> BroadcastReport {
        let chat_ids = self.subscribers.snapshot().await;
        info!(subscribers = chat_ids.len(), "step: broadcasting daily verse");

        let results: Vec<_> = stream::iter(chat_ids)
            .map(|chat_id| async move {
                let result = self.bot.send_message(&Chat::from_id(chat_id), text).await;
                (chat_id, result)
            })
            .buffer_unordered(self.max_in_flight)
            .collect()
            .await;

        let mut report = BroadcastReport::default();
        for (chat_id, result) in results {
            match result {
                Ok(()) => report.delivered += 1,
                Err(e) if e.is_recipient_unreachable() => {
                    report.failed += 1;
                    info!(chat_id = chat_id, error = %e, "Subscriber unreachable, unsubscribing");
                    if self.subscribers.unsubscribe(chat_id).await {
                        report.unsubscribed.push(chat_id);
                    }
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(chat_id = chat_id, error = %e, "Daily verse delivery failed");
                }
            }
        }

        info!(
            delivered = report.delivered,
            failed = report.failed,
            unsubscribed = report.unsubscribed.len(),
            "step: daily verse broadcast done"
        );
        report
    }

    /// Sleeps until each scheduled time and broadcasts. Never returns.
    pub async fn run(&self, schedule: DailySchedule) {
        let mut last_fired = None;
        loop {
            let now = Utc::now();
            let next = next_firing(&schedule, now, last_fired);
            info!(next_run = %next, "Next daily verse scheduled");
            let wait = (next - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;
            last_fired = Some(next);
            self.broadcast_once().await;
        }
    }
}

/// Next firing time after both `now` and the previous firing, so a clock stepping backwards
/// never repeats a day's broadcast.
pub fn next_firing(
    schedule: &DailySchedule,
    now: DateTime<Utc>,
    last_fired: Option<DateTime<Utc>>,
) -> DateTime<Utc> {
    let from = last_fired.map_or(now, |last| last.max(now));
    schedule.next_after(from)
}
