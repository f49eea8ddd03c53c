use futures_lite::future::block_on;
use tracing::{info_span, Instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use request_then_process::two_ways::do_work::{auto, chained, manual};

const LOCATION: &str = "Facebook";

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // a rejection is already logged where it happens; nothing left to do with it
    block_on(async {
        let _ = chained::do_work(LOCATION)
            .instrument(info_span!("chained"))
            .await;
        let _ = auto::do_work(LOCATION)
            .instrument(info_span!("auto"))
            .await;
        let _ = manual::do_work(LOCATION)
            .instrument(info_span!("manual"))
            .await;
    });
}
