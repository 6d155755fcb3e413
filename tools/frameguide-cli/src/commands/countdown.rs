//! Show the self-timer countdown for a capture.

use frameguide_common::clock::ns_to_secs;
use frameguide_pose_model::SelfTimer;
use frameguide_processing_core::countdown::Countdown;

pub fn run(timer: SelfTimer) -> anyhow::Result<()> {
    let countdown = Countdown::new(timer);

    if timer.is_off() {
        println!("Timer off: capture immediately");
        return Ok(());
    }

    println!("Timer {timer}");
    for tick in countdown.ticks() {
        println!("{:>7.3}s  {}", ns_to_secs(tick.at_ns), tick.remaining);
    }
    println!(
        "{:>7.3}s  capture",
        ns_to_secs(countdown.capture_delay_ns())
    );
    Ok(())
}
