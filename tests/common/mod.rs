//! Shared test utilities and constants.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cointrack::FetchError;
use cointrack::fetcher::AssetSource;
use cointrack::models::AssetRecord;
use cointrack::poller::PollState;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Live CoinCap asset-listing endpoint.
pub const COINCAP_ASSETS_URL: &str = "https://api.coincap.io/v2/assets";

/// Builds a record with the given id and rank.
pub fn asset(id: &str, rank: &str) -> AssetRecord {
    AssetRecord {
        id: id.to_string(),
        rank: rank.to_string(),
        name: id.to_string(),
        price_usd: Some("100.5".to_string()),
        change_percent_24hr: Some("-0.25".to_string()),
    }
}

/// The five-asset listing used across tests, in server order.
pub fn mixed_listing() -> Vec<AssetRecord> {
    vec![
        asset("bitcoin", "1"),
        asset("dogecoin", "3"),
        asset("ethereum", "2"),
        asset("tether", "5"),
        asset("litecoin", "4"),
    ]
}

/// JSON body equivalent to [`mixed_listing`].
pub fn mixed_listing_body() -> String {
    r#"{"data": [
        {"id": "bitcoin", "rank": "1", "symbol": "BTC", "name": "Bitcoin", "priceUsd": "67012.3456", "changePercent24Hr": "1.25"},
        {"id": "dogecoin", "rank": "3", "symbol": "DOGE", "name": "Dogecoin", "priceUsd": "0.12", "changePercent24Hr": "-4.1"},
        {"id": "ethereum", "rank": "2", "symbol": "ETH", "name": "Ethereum", "priceUsd": "3100.5", "changePercent24Hr": "-0.004999"},
        {"id": "tether", "rank": "5", "symbol": "USDT", "name": "Tether", "priceUsd": "1.0002", "changePercent24Hr": "0"},
        {"id": "litecoin", "rank": "4", "symbol": "LTC", "name": "Litecoin", "priceUsd": "70", "changePercent24Hr": null}
    ], "timestamp": 1700000000000}"#
        .to_string()
}

/// Ids of a published snapshot, or `None` if the state is not `Ready`.
pub fn ready_ids(state: &PollState) -> Option<Vec<String>> {
    match state {
        PollState::Ready(snapshot) => Some(snapshot.iter().map(|r| r.id.clone()).collect()),
        _ => None,
    }
}

/// A subscriber that forwards every state to a channel.
pub fn recording_subscriber() -> (
    impl FnMut(PollState) + Send + 'static,
    mpsc::UnboundedReceiver<PollState>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let subscriber = move |state: PollState| {
        let _ = tx.send(state);
    };
    (subscriber, rx)
}

/// Takes every state received so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<PollState>) -> Vec<PollState> {
    let mut states = Vec::new();
    while let Ok(state) = rx.try_recv() {
        states.push(state);
    }
    states
}

/// One scripted response of a [`ScriptedSource`].
pub enum Step {
    Listing {
        delay: Duration,
        records: Vec<AssetRecord>,
    },
    Failure {
        delay: Duration,
    },
}

impl Step {
    pub fn listing(delay_secs: u64, records: Vec<AssetRecord>) -> Self {
        Step::Listing {
            delay: Duration::from_secs(delay_secs),
            records,
        }
    }

    pub fn failure(delay_secs: u64) -> Self {
        Step::Failure {
            delay: Duration::from_secs(delay_secs),
        }
    }
}

/// An [`AssetSource`] that replays a fixed script, one step per fetch.
///
/// Fetches past the end of the script fail immediately.
#[derive(Clone)]
pub struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Step>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AssetSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<AssetRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().unwrap().pop_front();

        match step {
            Some(Step::Listing { delay, records }) => {
                tokio::time::sleep(delay).await;
                Ok(records)
            }
            Some(Step::Failure { delay }) => {
                tokio::time::sleep(delay).await;
                Err(FetchError::Parse("scripted failure".to_string()))
            }
            None => Err(FetchError::Parse("script exhausted".to_string())),
        }
    }
}

/// Serves `body` with `status` to every connection on a local port.
pub async fn serve(status: u16, body: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            request.extend_from_slice(&buf[..n]);
                            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Listing URL on a local test server.
pub fn assets_url(addr: SocketAddr) -> String {
    format!("http://{addr}/v2/assets")
}
