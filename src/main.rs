use anyhow::Result;
use clap::Parser;
use log::info;

use city_sim::simulation::CityWorld;

#[derive(Parser)]
#[command(name = "city_sim")]
#[command(about = "Grid city simulation with a headless console driver")]
struct Cli {
    /// Number of simulated months to run
    #[arg(long, default_value = "12")]
    months: u32,

    /// Hourly ticks to run between monthly ticks
    #[arg(long, default_value = "24")]
    hours_per_month: u32,

    /// Fast (traffic) ticks per simulated hour
    #[arg(long, default_value = "4")]
    ticks_per_hour: u32,

    /// Vehicle spawn attempts per month
    #[arg(long, default_value = "8")]
    spawn_attempts: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the ASCII map after each month
    #[arg(long)]
    map: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut world = match cli.seed {
        Some(seed) => CityWorld::create_test_city_with_seed(seed),
        None => CityWorld::create_test_city(),
    };

    info!(
        "running {} months, {} hours per month, {} fast ticks per hour",
        cli.months, cli.hours_per_month, cli.ticks_per_hour
    );

    println!("Initial state:");
    world.print_summary();
    if cli.map {
        world.draw_map();
    }
    println!();

    for month in 1..=cli.months {
        // The fast and hourly cadences interleave; the monthly tick runs
        // on its own slower schedule, never re-entering either.
        for _ in 0..cli.hours_per_month {
            for _ in 0..cli.ticks_per_hour {
                world.tick_fast();
            }
            world.tick_hour();
        }

        world.spawn_vehicles(cli.spawn_attempts);
        world.tick_month();

        println!("--- After month {} ---", month);
        world.print_summary();
        if cli.map {
            world.draw_map();
        }
        println!();
    }

    println!("=== SIMULATION COMPLETE ===");
    Ok(())
}
