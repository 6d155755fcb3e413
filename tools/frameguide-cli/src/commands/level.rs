//! Read the bubble level from device orientation.

use frameguide_processing_core::level::{LevelConfig, LevelReading};

pub fn run(beta: Option<f64>, gamma: Option<f64>) -> anyhow::Result<()> {
    let reading = LevelReading::from_orientation(beta, gamma, &LevelConfig::default());

    println!("Bubble: {:.1}%", reading.bubble_percent);
    println!(
        "Level:  {}",
        if reading.is_level { "yes" } else { "no" }
    );
    Ok(())
}
