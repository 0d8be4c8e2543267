use anyhow::{Context, Result};
use log::{info, warn};
use rmm_logger::{default_logger, install_default_logger, rmm_log_debug, rmm_log_info, rmm_log_warn, select_sink};
use std::thread;

fn main() -> Result<()> {
    // Reported before first use so the demo shows what the default logger will pick.
    let target = select_sink().target().clone();

    install_default_logger().context("Failed to install RMM logger")?;
    let logger = default_logger();
    rmm_log_info!("{} logger ready, writing to {}", logger.name(), target);

    let workers: Vec<_> = (0..4)
        .map(|i| {
            thread::Builder::new()
                .name(format!("rmm-demo-{}", i))
                .spawn(move || {
                    info!("worker {} allocating {} bytes", i, (i + 1) * 256);
                    rmm_log_debug!("worker {} debug is hidden at {} level", i, default_logger().level());
                })
        })
        .collect::<Result<_, _>>()
        .context("Failed to spawn worker thread")?;

    for worker in workers {
        if worker.join().is_err() {
            warn!("worker thread panicked");
        }
    }

    rmm_log_warn!(pool = "device", "demo finished");
    Ok(())
}
