use clap::Parser;

mod capture;

#[derive(Parser, Debug)]
#[command(name = "deskshot")]
#[command(version, about = "One-shot desktop screenshot saved as PNG")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let _cli = Cli::parse();

    // A failed capture is fatal: nothing is written to disk.
    let frame = match capture::desktop() {
        Ok(frame) => frame,
        Err(e) => {
            log::error!("Screenshot capture failed: {e}");
            return Err(e.into());
        }
    };

    log::info!(
        "Captured {}x{} desktop frame",
        frame.width(),
        frame.height()
    );

    let path = capture::file::default_output_path()?;
    capture::file::save_screenshot(frame, &path)?;

    log::info!("Screenshot saved to {}", path.display());

    Ok(())
}
