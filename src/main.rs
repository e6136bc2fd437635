mod mechanics;
mod tui;
mod metrics;

use clap::{Parser, Subcommand};
use mechanics::rolling::final_disk_speed_with_diagnostics;
use anyhow::Result;

/// Inclino - rolling-disk incline descent calculator
#[derive(Parser)]
#[command(name = "inclino", about = "Final speed of a uniform disk rolling down an incline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run interactive TUI simulation
    Tui,
    /// Compute one descent from explicit parameters
    Solve {
        /// Vertical drop of the incline (m)
        #[arg(long)]
        height: f64,
        /// Slope length (m)
        #[arg(long, default_value_t = 10.0)]
        length: f64,
        /// Slope angle (degrees, exclusive 0..90)
        #[arg(long, default_value_t = 30.0)]
        incline: f64,
        /// Disk mass (kg)
        #[arg(long, default_value_t = 2.0)]
        mass: f64,
        /// Kinetic friction coefficient
        #[arg(long, default_value_t = 0.3)]
        friction: f64,
        /// Disk radius (m)
        #[arg(long, default_value_t = 0.5)]
        radius: f64,
    },
    /// Sample final speed over a height range and export to CSV + plot
    Sweep {
        /// Largest drop height to sample (m)
        #[arg(long, default_value_t = 10.0)]
        max_height: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tui) => tui::start()?,
        Some(Commands::Solve {
            height,
            length,
            incline,
            mass,
            friction,
            radius,
        }) => run_solve(height, length, incline, mass, friction, radius)?,
        Some(Commands::Sweep { max_height }) => run_sweep(max_height)?,
        None => tui::start()?, // default
    }

    Ok(())
}

fn run_solve(
    height: f64,
    length: f64,
    incline: f64,
    mass: f64,
    friction: f64,
    radius: f64,
) -> Result<()> {
    let mut stdout = std::io::stdout();
    // Invalid input is reported via the diagnostic, not as a process error
    if let Some(speed) =
        final_disk_speed_with_diagnostics(height, length, incline, mass, friction, radius, &mut stdout)
    {
        println!("Final speed: {speed:.4} m/s");
    }
    Ok(())
}

fn run_sweep(max_height: f64) -> Result<()> {
    let mut log = Vec::new();
    for i in 1..=100 {
        let height = max_height * i as f64 / 100.0;
        if let Some(dp) = metrics::snapshot(height, 10.0, 30.0, 2.0, 0.3, 0.5) {
            log.push(dp);
        }
    }

    metrics::export_csv(&log, "sweep.csv")?;
    metrics::plot_results(&log, "plot.png")?;
    Ok(())
}
