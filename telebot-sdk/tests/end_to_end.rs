//! End-to-end test of the facade against a mock Bot API server
//!
//! Drives the full stack - facade, polling loop, typed operations, HTTP
//! transport - and verifies the offset handshake on the wire.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use http_client::HttpClient;
use mockito::Matcher;
use telebot_sdk::{ApiClient, PollerConfig, TelebotClient};

const TOKEN: &str = "123456:test-token";

fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}

#[test]
fn polling_delivers_batches_and_advances_the_wire_offset() {
    let mut server = mockito::Server::new();

    // First poll carries no offset (empty query string) and yields two
    // updates.
    server
        .mock("GET", format!("/bot{}/getUpdates", TOKEN).as_str())
        .match_query(Matcher::Regex("^$".into()))
        .with_status(200)
        .with_body(
            r#"{"ok":true,"result":[
                {"update_id":5,"message":{"message_id":1,"text":"first"}},
                {"update_id":6,"message":{"message_id":2,"text":"second"}}
            ]}"#,
        )
        .create();

    // Every poll after the delivered batch must resume at offset 7.
    let resumed = server
        .mock("GET", format!("/bot{}/getUpdates", TOKEN).as_str())
        .match_query(Matcher::UrlEncoded("offset".into(), "7".into()))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":[]}"#)
        .expect_at_least(1)
        .create();

    let api = ApiClient::with_http_client(TOKEN, HttpClient::with_base_url(server.url()));
    let bot = TelebotClient::with_api_client(
        api,
        PollerConfig::default().with_check_interval(Duration::from_millis(20)),
    );

    let batches: Arc<Mutex<Vec<Vec<i64>>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&batches);
    bot.on_updates(move |batch| {
        seen.lock()
            .unwrap()
            .push(batch.iter().map(|u| u.update_id).collect());
    })
    .unwrap();

    bot.start_checking_updates().unwrap();
    assert!(wait_until(Duration::from_secs(2), || {
        !batches.lock().unwrap().is_empty()
    }));
    assert!(wait_until(Duration::from_secs(2), || resumed.matched()));
    bot.stop_checking_updates().unwrap();

    resumed.assert();
    assert_eq!(*batches.lock().unwrap(), vec![vec![5, 6]]);
}

#[test]
fn poll_errors_reach_the_error_channel_and_polling_continues() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", format!("/bot{}/getUpdates", TOKEN).as_str())
        .with_status(502)
        .with_body(r#"{"ok":false,"error_code":502,"description":"Bad Gateway"}"#)
        .expect_at_least(2)
        .create();

    let api = ApiClient::with_http_client(TOKEN, HttpClient::with_base_url(server.url()));
    let bot = TelebotClient::with_api_client(
        api,
        PollerConfig::default().with_check_interval(Duration::from_millis(20)),
    );

    let errors = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&errors);
    bot.on_update_error(move |error| {
        seen.lock().unwrap().push(error.to_string());
    })
    .unwrap();

    bot.start_checking_updates().unwrap();
    // The loop keeps polling through consecutive failures.
    assert!(wait_until(Duration::from_secs(2), || {
        errors.lock().unwrap().len() >= 2
    }));
    bot.stop_checking_updates().unwrap();

    let errors = errors.lock().unwrap();
    assert!(errors[0].contains("Bad Gateway"));
}
