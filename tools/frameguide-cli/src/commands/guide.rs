//! Show guide silhouettes and alignment bands.

use frameguide_pose_model::GuideMode;

pub fn run(mode: Option<GuideMode>) -> anyhow::Result<()> {
    let modes = match mode {
        Some(mode) => vec![mode],
        None => GuideMode::ALL.to_vec(),
    };

    for mode in modes {
        println!("{mode}");
        match (mode.silhouette(), mode.vertical_band()) {
            (Some(s), Some(band)) => {
                println!(
                    "  Silhouette: {}x{} (corner radii {} / {})",
                    s.width, s.height, s.top_radius, s.bottom_radius
                );
                println!(
                    "  Shoulder band: {:.2} < y < {:.2}",
                    band.min, band.max
                );
            }
            _ => println!("  No guide; alignment feedback is hidden"),
        }
    }

    Ok(())
}
