use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flotilla::{init_logging, FleetPlacer, PlacementSettings, ShipPlacement};

/// Generate a random fleet layout and print it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u32>,
    /// Board height in cells.
    #[arg(long)]
    height: Option<u32>,
    /// Allow ships to bend instead of forcing straight lines.
    #[arg(long)]
    bent: bool,
    /// Allow ships to touch each other.
    #[arg(long)]
    stick: bool,
    #[arg(long, help = "Fix the RNG seed of each placement attempt (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Load settings (board size, fleet, flags) from a JSON file.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading settings file {}", path.display()))?;
            serde_json::from_str::<PlacementSettings>(&text)
                .with_context(|| format!("parsing settings file {}", path.display()))?
        }
        None => PlacementSettings::default(),
    };
    if let Some(width) = cli.width {
        settings.width = width;
    }
    if let Some(height) = cli.height {
        settings.height = height;
    }
    if cli.bent {
        settings.straight_ships = false;
    }
    if cli.stick {
        settings.ships_can_stick = true;
    }
    settings.validate();

    let mut placer = FleetPlacer::new(settings.clone());
    if let Some(seed) = cli.seed {
        println!("Using fixed seed: {}", seed);
        placer = placer.with_seed(seed);
    }

    let placements = placer.place().await?;
    print_layout(&settings, &placements);
    for (i, placement) in placements.iter().enumerate() {
        let label = ship_label(i);
        println!(
            "{}: {} (size {})",
            label, placement.descriptor.name, placement.descriptor.size
        );
    }
    Ok(())
}

fn ship_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Paint the layout as an ASCII grid, one letter per ship, '.' for water.
fn print_layout(settings: &PlacementSettings, placements: &[ShipPlacement]) {
    let mut rows =
        vec![vec!['.'; settings.width as usize]; settings.height as usize];
    for (i, placement) in placements.iter().enumerate() {
        for coord in placement.chain.coords() {
            rows[coord.y as usize][coord.x as usize] = ship_label(i);
        }
    }
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
