//! Subscription and marketing event streams.
//!
//! Both streams hang off the player dimension: subscriptions walk forward
//! from each account's creation date in fixed renewal steps, and marketing
//! campaigns fan out over a random recipient subset with an
//! open-then-click funnel.

use rand::Rng;
use rand::seq::SliceRandom;
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use super::new_id;
use super::player::GeneratedPlayer;
use crate::catalog;
use crate::config::DateRange;

/// Generated subscription lifecycle event.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedSubscriptionEvent {
    pub event_id: Uuid,
    pub event_type: &'static str,
    pub player_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub event_timestamp: OffsetDateTime,
    pub event_date: Date,
    pub subscription_tier: &'static str,
    pub amount_usd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<&'static str>,
}

/// Generated marketing funnel event.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedMarketingEvent {
    pub event_id: Uuid,
    pub event_type: &'static str,
    pub player_id: Uuid,
    pub campaign_id: &'static str,
    pub campaign_name: &'static str,
    pub channel: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub event_timestamp: OffsetDateTime,
    pub event_date: Date,
}

/// Configuration for event stream generation.
#[derive(Debug, Clone)]
pub struct EventGenConfig {
    /// Days between subscription renewals.
    pub renewal_interval_days: i64,
    /// Chance a subscription cancels at each renewal step.
    pub cancel_probability: f64,
    /// Fraction range of the player base a campaign reaches.
    pub campaign_reach: (f64, f64),
    /// Days into the range a campaign may launch.
    pub campaign_launch_window_days: i64,
}

impl Default for EventGenConfig {
    fn default() -> Self {
        Self {
            renewal_interval_days: 30,
            cancel_probability: 0.04,
            campaign_reach: (0.3, 0.8),
            campaign_launch_window_days: 60,
        }
    }
}

const PAYMENT_METHODS: &[&str] = &["credit_card", "paypal", "apple_pay"];
const CANCELLATION_REASONS: &[&str] = &["price", "not_using", "competitor", "other"];

/// Generates subscription lifecycle streams.
pub struct SubscriptionEventGenerator {
    config: EventGenConfig,
}

impl SubscriptionEventGenerator {
    /// Creates a new generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(EventGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EventGenConfig) -> Self {
        Self { config }
    }

    /// Emits the lifecycle stream for every player.
    pub fn generate(
        &self,
        players: &[GeneratedPlayer],
        range: &DateRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedSubscriptionEvent> {
        players
            .iter()
            .flat_map(|p| self.generate_for_player(p, range, rng))
            .collect()
    }

    /// Walks one player's subscription forward from account creation: a
    /// start event, then a renewal per interval until the range ends or the
    /// player churns (terminal).
    pub fn generate_for_player(
        &self,
        player: &GeneratedPlayer,
        range: &DateRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedSubscriptionEvent> {
        let tier = catalog::tier(player.membership_tier)
            .expect("player tiers come from the catalog");
        let end = range.end_datetime();
        let mut events = Vec::new();

        events.push(GeneratedSubscriptionEvent {
            event_id: new_id(rng),
            event_type: "subscription_started",
            player_id: player.player_id,
            event_timestamp: player.created_at,
            event_date: player.created_at.date(),
            subscription_tier: tier.id,
            amount_usd: tier.monthly_price,
            payment_method: Some(PAYMENT_METHODS[rng.gen_range(0..PAYMENT_METHODS.len())]),
            cancellation_reason: None,
        });

        let mut current = player.created_at;
        loop {
            current += Duration::days(self.config.renewal_interval_days);
            if current > end {
                break;
            }

            if rng.r#gen::<f64>() < self.config.cancel_probability {
                events.push(GeneratedSubscriptionEvent {
                    event_id: new_id(rng),
                    event_type: "subscription_cancelled",
                    player_id: player.player_id,
                    event_timestamp: current,
                    event_date: current.date(),
                    subscription_tier: tier.id,
                    amount_usd: 0.0,
                    payment_method: None,
                    cancellation_reason: Some(
                        CANCELLATION_REASONS[rng.gen_range(0..CANCELLATION_REASONS.len())],
                    ),
                });
                break;
            }

            events.push(GeneratedSubscriptionEvent {
                event_id: new_id(rng),
                event_type: "subscription_renewed",
                player_id: player.player_id,
                event_timestamp: current,
                event_date: current.date(),
                subscription_tier: tier.id,
                amount_usd: tier.monthly_price,
                payment_method: None,
                cancellation_reason: None,
            });
        }

        events
    }
}

impl Default for SubscriptionEventGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates marketing campaign funnels.
pub struct MarketingEventGenerator {
    config: EventGenConfig,
}

impl MarketingEventGenerator {
    /// Creates a new generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(EventGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EventGenConfig) -> Self {
        Self { config }
    }

    /// Runs every catalog campaign against a random recipient subset.
    ///
    /// Opens fire with the campaign's open rate; clicks fire conditionally
    /// at `click_rate / open_rate`, so the unconditional click probability
    /// equals the configured click rate.
    pub fn generate(
        &self,
        players: &[GeneratedPlayer],
        range: &DateRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedMarketingEvent> {
        let mut events = Vec::new();

        for campaign in catalog::CAMPAIGNS {
            let launch_date = range.start
                + Duration::days(rng.gen_range(0..=self.config.campaign_launch_window_days));

            let (min_reach, max_reach) = self.config.campaign_reach;
            let reach = (players.len() as f64 * rng.gen_range(min_reach..max_reach)) as usize;

            for player in players.choose_multiple(rng, reach) {
                let send_time = launch_date.midnight().assume_utc()
                    + Duration::hours(rng.gen_range(8..=12));

                events.push(GeneratedMarketingEvent {
                    event_id: new_id(rng),
                    event_type: "campaign_sent",
                    player_id: player.player_id,
                    campaign_id: campaign.id,
                    campaign_name: campaign.name,
                    channel: campaign.channel,
                    event_timestamp: send_time,
                    event_date: send_time.date(),
                });

                if rng.r#gen::<f64>() < campaign.open_rate {
                    let open_time = send_time + Duration::hours(rng.gen_range(1..=48));
                    events.push(GeneratedMarketingEvent {
                        event_id: new_id(rng),
                        event_type: "campaign_opened",
                        player_id: player.player_id,
                        campaign_id: campaign.id,
                        campaign_name: campaign.name,
                        channel: campaign.channel,
                        event_timestamp: open_time,
                        event_date: open_time.date(),
                    });

                    if rng.r#gen::<f64>() < campaign.click_rate / campaign.open_rate {
                        let click_time = open_time + Duration::minutes(rng.gen_range(1..=30));
                        events.push(GeneratedMarketingEvent {
                            event_id: new_id(rng),
                            event_type: "campaign_clicked",
                            player_id: player.player_id,
                            campaign_id: campaign.id,
                            campaign_name: campaign.name,
                            channel: campaign.channel,
                            event_timestamp: click_time,
                            event_date: click_time.date(),
                        });
                    }
                }
            }
        }

        events
    }
}

impl Default for MarketingEventGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::player::PlayerGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    fn make_players(count: usize, seed: u64) -> (Vec<GeneratedPlayer>, DateRange) {
        let range = DateRange::default();
        let mut rng = StdRng::seed_from_u64(seed);
        (
            PlayerGenerator::new().generate_batch(count, &range, &mut rng),
            range,
        )
    }

    #[test]
    fn test_loyal_subscriber_renews_every_interval() {
        let range = DateRange::trailing_days(date!(2025 - 09 - 30), 90);
        let mut rng = StdRng::seed_from_u64(50);

        let mut player = PlayerGenerator::new().generate(&range, &mut rng);
        player.created_at = range.end_datetime() - Duration::days(200);

        let never_cancels = SubscriptionEventGenerator::with_config(EventGenConfig {
            cancel_probability: 0.0,
            ..EventGenConfig::default()
        });
        let events = never_cancels.generate_for_player(&player, &range, &mut rng);

        // 200 days at a 30-day cadence: one start plus six renewals.
        assert_eq!(events.len(), 7);
        assert_eq!(events[0].event_type, "subscription_started");
        assert!(events[1..].iter().all(|e| e.event_type == "subscription_renewed"));
        assert!(events.iter().all(|e| e.event_timestamp <= range.end_datetime()));
    }

    #[test]
    fn test_cancellation_is_terminal() {
        let (players, range) = make_players(100, 51);
        let always_cancels = SubscriptionEventGenerator::with_config(EventGenConfig {
            cancel_probability: 1.0,
            ..EventGenConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(52);

        for player in &players {
            let events = always_cancels.generate_for_player(player, &range, &mut rng);
            let cancels = events
                .iter()
                .filter(|e| e.event_type == "subscription_cancelled")
                .count();

            assert!(cancels <= 1);
            if cancels == 1 {
                assert_eq!(events.last().unwrap().event_type, "subscription_cancelled");
                assert!(events.last().unwrap().cancellation_reason.is_some());
            }
        }
    }

    #[test]
    fn test_marketing_funnel_ordering() {
        let (players, range) = make_players(60, 53);
        let mut rng = StdRng::seed_from_u64(54);

        let events = MarketingEventGenerator::new().generate(&players, &range, &mut rng);
        assert!(!events.is_empty());

        let sent = events.iter().filter(|e| e.event_type == "campaign_sent").count();
        let opened = events.iter().filter(|e| e.event_type == "campaign_opened").count();
        let clicked = events.iter().filter(|e| e.event_type == "campaign_clicked").count();

        assert!(sent >= opened, "every open implies a send");
        assert!(opened >= clicked, "every click implies an open");

        // Reach: each of the 5 campaigns samples 30-80% of 60 players.
        assert!(sent >= catalog::CAMPAIGNS.len() * 18);
        assert!(sent <= catalog::CAMPAIGNS.len() * 48);
    }
}
