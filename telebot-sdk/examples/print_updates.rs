//! Print every update sent to the bot.
//!
//! Usage: BOT_TOKEN=123456:your-token cargo run --example print_updates

use std::time::Duration;

use telebot_sdk::{PollerConfig, TelebotClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("BOT_TOKEN")?;

    let config = PollerConfig::default()
        .with_check_interval(Duration::from_secs(2))
        .with_batch_limit(100);
    let bot = TelebotClient::with_config(token, config);

    let me = bot.get_me()?;
    println!(
        "polling updates for @{} (press Ctrl-C to quit)",
        me.username.unwrap_or_else(|| me.first_name.clone())
    );

    bot.on_updates(|batch| {
        for update in batch {
            match update.message().and_then(|m| m.get("text")) {
                Some(text) => println!("[{}] {}", update.update_id, text),
                None => println!("[{}] <non-text update>", update.update_id),
            }
        }
    })?;

    bot.on_update_error(|error| {
        eprintln!("poll failed: {}", error);
    })?;

    bot.start_checking_updates()?;

    loop {
        std::thread::sleep(Duration::from_secs(60));
    }
}
