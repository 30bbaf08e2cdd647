//! Facelet cube scrambler with an unfolded-net view.

use std::path::PathBuf;

use clap::Parser;
use flatcube_core::{CubeState, DEFAULT_CUBE_SIZE};
use flatcube_draw::{DEFAULT_CELL_PX, Net, NetLayout, Palette};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

mod scramble;
mod term;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Cube side length.
    #[arg(long, default_value_t = DEFAULT_CUBE_SIZE)]
    size: usize,

    /// Scramble macro-steps; each issues four turns, and anything past 10
    /// is clamped.
    #[arg(long, default_value_t = 2)]
    steps: u32,

    /// Seed for the move generator; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write one PNG per snapshot into.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Pixels per facelet in written PNGs.
    #[arg(long, default_value_t = DEFAULT_CELL_PX)]
    cell_px: u32,

    /// YAML palette file to use instead of the default colors.
    #[arg(long)]
    palette: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::builder().init();
    let args = Args::parse();

    let palette = match &args.palette {
        Some(path) => serde_norway::from_str(&std::fs::read_to_string(path)?)?,
        None => Palette::default(),
    };
    let layout = NetLayout::cross();
    let mut cube = CubeState::new(args.size);

    println!("solved:");
    term::print_net(&Net::unfold(&cube, &layout), &palette);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("scrambling {} steps with seed {seed}", args.steps);
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let entries = scramble::scramble(&mut cube, args.steps, &mut rng)?;

    for entry in &entries {
        println!("{}:", entry.descriptor);
        term::print_net(&entry.net, &palette);
    }

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)?;
        for (i, entry) in entries.iter().enumerate() {
            let path = dir.join(format!("{i:03}_{}.png", entry.descriptor.replace(": ", "_")));
            entry.net.to_image(&palette, args.cell_px).save(&path)?;
        }
        log::info!("wrote {} snapshots to {}", entries.len(), dir.display());
    }

    Ok(())
}
