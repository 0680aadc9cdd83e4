// Simulated backend. Every "request" is a tokio sleep that posts its
// result back to the UI thread over the app channel; the channel
// discipline stays once a real server replaces the timers.

use std::sync::mpsc::Sender;
use std::sync::OnceLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use eframe::egui;

use crate::app::state::{CheckinReceipt, PostReceipt};
use crate::ui_constants::latency;

pub static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

pub fn rt() -> &'static tokio::runtime::Runtime {
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("tokio runtime")
    })
}

/// Results coming back from the simulated backend.
pub enum SimMsg {
    QrScanned { code: String },
    LocationResolved { address: String },
    CheckinAccepted(CheckinReceipt),
    PostPublished(PostReceipt),
}

/// A latency from the constants table, or zero with "instant responses" on.
pub fn sim_duration(ms: u64) -> Duration {
    if crate::app::settings::instant_responses() {
        Duration::ZERO
    } else {
        Duration::from_millis(ms)
    }
}

fn deliver(ctx: &egui::Context, tx: Sender<SimMsg>, wait: Duration, msg: SimMsg) {
    let ctx2 = ctx.clone();
    rt().spawn(async move {
        tokio::time::sleep(wait).await;
        let _ = tx.send(msg);
        ctx2.request_repaint();
    });
}

/// Pseudo-random four digits from the clock; enough for a scanner mock.
fn pseudo_code() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    1000 + nanos % 9000
}

pub fn scan_qr(ctx: &egui::Context, tx: Sender<SimMsg>) {
    let code = format!("WBS-{}", pseudo_code());
    log::info!("simulated QR scan scheduled, will yield {code}");
    deliver(ctx, tx, sim_duration(latency::QR_SCAN_MS), SimMsg::QrScanned { code });
}

pub fn resolve_location(ctx: &egui::Context, tx: Sender<SimMsg>) {
    // Fake reverse geocoding: a plausible address near the city center.
    let jitter = (pseudo_code() % 1000) as f64 / 10_000.0;
    let (lat, lng) = (-30.0277 - jitter, -51.2287 + jitter);
    let address = format!("Café do Centro, Rua Principal, {lat:.4}, {lng:.4}");
    deliver(
        ctx,
        tx,
        sim_duration(latency::GEOLOCATE_MS),
        SimMsg::LocationResolved { address },
    );
}

pub fn submit_checkin(ctx: &egui::Context, tx: Sender<SimMsg>, receipt: CheckinReceipt) {
    log::info!("check-in submitted for {}", receipt.book_id);
    deliver(
        ctx,
        tx,
        sim_duration(latency::CHECKIN_SUBMIT_MS),
        SimMsg::CheckinAccepted(receipt),
    );
}

pub fn publish_post(ctx: &egui::Context, tx: Sender<SimMsg>, receipt: PostReceipt) {
    log::info!("publishing discussion \"{}\"", receipt.title);
    deliver(
        ctx,
        tx,
        sim_duration(latency::PUBLISH_MS),
        SimMsg::PostPublished(receipt),
    );
}
