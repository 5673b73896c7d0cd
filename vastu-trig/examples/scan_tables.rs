//! Inspect the sin/cos table for a scan geometry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example scan_tables -- --rays 360 --aperture-deg 360
//! cargo run --example scan_tables -- --rays 5 --aperture-deg 180 --left-to-right --print
//! ```

use clap::Parser;
use vastu_trig::{RangeScan, TrigConfig, TrigTableCache};

#[derive(Parser, Debug)]
#[command(about = "Compute and inspect scan sin/cos lookup tables")]
struct Args {
    /// Number of rays in the scan
    #[arg(long, default_value_t = 360)]
    rays: usize,

    /// Field of view in degrees
    #[arg(long, default_value_t = 360.0)]
    aperture_deg: f32,

    /// Sweep from left to right (angles decrease with ray index)
    #[arg(long)]
    left_to_right: bool,

    /// Simulated scans to push through the cache
    #[arg(long, default_value_t = 100)]
    scans: usize,

    /// Print every ray angle with its cos/sin
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = TrigConfig::load_default()?;
    let mut cache = TrigTableCache::from_config(&config);

    let scan = RangeScan::new(
        vec![1.0; args.rays],
        args.aperture_deg.to_radians(),
        !args.left_to_right,
        0.15,
        8.0,
    );
    let geometry = scan.geometry();

    let mut points = 0;
    for _ in 0..args.scans {
        let table = cache.get_for_scan(&scan);
        points += scan.project(&table).len();
    }

    println!(
        "Geometry: {} rays, aperture {:.4} rad, step {:.6} rad",
        geometry.ray_count(),
        geometry.aperture(),
        geometry.angle_step()
    );

    if args.print {
        let table = cache.get(&geometry);
        for (i, (cos, sin)) in table.iter().enumerate() {
            let angle = geometry.ray_angle(i).unwrap_or_default();
            println!("{:5} {:+9.5} {:+9.5} {:+9.5}", i, angle, cos, sin);
        }
    }

    let stats = cache.stats();
    println!(
        "Projected {} points; cache hits={} misses={} hit rate={:.1}%",
        points,
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );

    Ok(())
}
