use gz_dropzone::app::DropZoneApp;
use gz_dropzone::config::ClientConfig;
use gz_dropzone::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::init("gz_dropzone=info");

    let config = ClientConfig::from_env()?;
    let app = DropZoneApp::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([600.0, 600.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GZ File Drop Zone",
        options,
        Box::new(move |_cc: &eframe::CreationContext<'_>| Box::new(app)),
    )?;
    Ok(())
}
