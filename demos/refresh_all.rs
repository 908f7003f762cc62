use std::env;
use std::path::PathBuf;
use wien_wetter::{Dashboard, Selection, WienWetterError};

/// Usage: `cargo run --example refresh_all -- [selection] [data dir]`
#[tokio::main]
async fn main() -> Result<(), WienWetterError> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let selection: Selection = args.next().as_deref().unwrap_or("all").parse()?;
    let dashboard = match args.next() {
        Some(dir) => Dashboard::with_data_folder(PathBuf::from(dir)).await?,
        None => Dashboard::with_default_data_folder().await?,
    };

    let Some(view) = dashboard.refresh(selection).await else {
        println!("Selection changed while loading, nothing to show.");
        return Ok(());
    };

    for region in &view.regions {
        println!("{} [{}]\n{}\n", region.tooltip, region.style().fill_color, region.popup);
    }
    println!("{} stations shown", view.markers.len());
    for marker in view.markers.iter().take(5) {
        println!("{} {}\n{}\n", marker.label, marker.style, marker.popup);
    }
    Ok(())
}
