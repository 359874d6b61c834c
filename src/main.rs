mod ui;

use clap::{Parser, Subcommand};
use egui::Vec2;
use log::{error, info};

use museum_map::{AppConfig, MuseumMapError, museum_catalog};
use ui::MuseumMapApp;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the map window (default)
    Run {
        /// Catalog index of the museum selected on startup
        #[arg(short, long)]
        place: Option<usize>,

        /// Artificial delay of the route provider
        #[arg(long)]
        latency_ms: Option<u64>,

        /// Routes longer than this are rejected
        #[arg(long)]
        max_route_km: Option<f64>,
    },
    /// Write the default config file and exit
    InitConfig,
}

fn run(
    place: Option<usize>,
    latency_ms: Option<u64>,
    max_route_km: Option<f64>,
) -> Result<(), MuseumMapError> {
    let mut app_config = AppConfig::load_or_default();
    if let Some(place) = place {
        // fail early instead of opening a window without a selection
        museum_catalog().get(place)?;
        app_config.initial_place = place;
    }
    if let Some(latency_ms) = latency_ms {
        app_config.route_provider.simulated_latency_ms = latency_ms;
    }
    if let Some(max_route_km) = max_route_km {
        app_config.route_provider.max_route_distance_km = max_route_km;
    }

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(app_config.window_width, app_config.window_height))
        .with_min_inner_size(Vec2::new(320., 480.));

    eframe::run_native(
        "Museums",
        native_options,
        Box::new(move |cc| Ok(Box::new(MuseumMapApp::new(app_config, cc)))),
    )
    .map_err(|e| MuseumMapError::AppStartError {
        description: e.to_string(),
    })
}

fn init_config() -> Result<(), MuseumMapError> {
    let path = AppConfig::default().save()?;
    info!("Wrote default config to {:?}", path);
    println!("{}", path.display());
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .unwrap_or_else(|e| error!("Could not set Ctrl-C handler: {}", e));

    let result = match cli.command {
        Some(Commands::InitConfig) => init_config(),
        Some(Commands::Run {
            place,
            latency_ms,
            max_route_km,
        }) => run(place, latency_ms, max_route_km),
        None => run(None, None, None),
    };
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
