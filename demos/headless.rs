use quakemap::{LayerTrait, MapComposer, ViewerConfig};

/// Composes the earthquake map from the live feeds and prints its state,
/// without any renderer attached.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ViewerConfig::from_env().unwrap_or_else(|_| {
        eprintln!("MAPBOX_ACCESS_TOKEN not set; tile URLs will carry a placeholder token");
        ViewerConfig::new("pk.placeholder")
    });

    let composer = MapComposer::new(config)
        .with_error_handler(|e| eprintln!("overlay feed failed: {}", e));

    let mut view = composer.compose_http().await?;

    println!("Earthquake map composed:");
    println!(
        "   Center: {:.2}, {:.2} at zoom {}",
        view.center().lat,
        view.center().lng,
        view.zoom()
    );

    let control = view.layer_control();
    println!("   Basemaps: {:?} (active: {})", control.basemaps, control.active_basemap);
    for (name, visible) in &control.overlays {
        println!("   Overlay {:<15} visible: {}", name, visible);
    }

    if let Some(legend) = view.legend() {
        println!("   Legend ({}):", legend.title());
        for entry in legend.entries() {
            println!("      {:<4} {}", entry.label, entry.color.css_name());
        }
    }

    // Exercise the switcher the way a host UI would
    view.set_basemap("satellite")?;
    println!("   Switched basemap to: {}", view.active_basemap().map(|b| b.name()).unwrap_or("?"));

    Ok(())
}
