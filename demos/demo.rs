//! Headless walkthrough of the engine: startup, filters, basemap switch,
//! search, routing and user points, with an in-memory platform.
//!
//! Run with `cargo run --example demo`.

use std::sync::Arc;

use anyhow::Result;

use traxmap::category::Category;
use traxmap::core::config::AppConfig;
use traxmap::platform::{FixedLocation, MemoryStore, Notifier, Platform};
use traxmap::points::PointDraft;
use traxmap::Map;

fn main() -> Result<()> {
    env_logger::init();

    let storage = Arc::new(MemoryStore::new());
    let notifier = Arc::new(Notifier::new());
    let platform = Platform {
        storage: storage.clone(),
        notifier: notifier.clone(),
        geolocation: Arc::new(FixedLocation(traxmap::LatLng::new(62.0272, 129.7319))),
    };

    let mut map = Map::startup(AppConfig::default(), None, platform)?;
    println!(
        "started: {} markers on {}",
        map.visible_count(),
        map.layers().current().name()
    );

    println!("\nbasemap catalog:");
    for (key, name) in map.layers().catalog() {
        println!("  {key:17} {name}");
    }

    map.select_layer("yandex_satellite");
    println!("\nswitched basemap -> {}", map.layers().current().name());
    if let Some(notice) = notifier.current() {
        println!("notice: {}", notice.message);
    }

    let count = map.apply_filters([Category::Fuel, Category::Ferry, Category::Danger]);
    println!("\nfuel/ferry/danger only: {count} markers");
    for marker in map.renderer().markers() {
        println!(
            "  {} {} @ {}",
            marker.icon.emoji, marker.popup.title, marker.position
        );
    }

    println!("\nsearch 'лена':");
    for hit in map.search("лена") {
        println!("  {} {} ({})", hit.meta().icon, hit.point.name, hit.meta().label);
    }

    let plan = map.plan_route("Мое местоположение", "Паром Нижний Бестях")?;
    println!("\nroute planned: {} -> {}", plan.from, plan.to);
    let url = map.build_route_to(plan.to.lat, plan.to.lng);
    println!("navigator link: {url}");

    let draft = PointDraft::new("Стоянка у переправы", Category::Parking, 61.97, 129.91);
    let id = map.add_user_point(draft, Some("2026-08-06T09:00:00Z".to_string()))?;
    map.save_favorite(id);
    println!("\nadded user point {id}, favorites: {:?}", map.store().favorites(storage.as_ref()));

    Ok(())
}
