use bmp_ascii::{INPUT_PATH, RenderConfig, render_file};
use std::io::{self, Write};
use std::path::Path;

fn main() {
    // Configure logging
    env_logger::init();

    let stdout = io::stdout();
    if let Err(e) = run(INPUT_PATH, stdout.lock()) {
        // Failures are reported, never signalled through the exit status
        eprintln!("Error: {e}");
    }
}

/// Render the bitmap at `path` to `out` with the default block size and ramp
fn run<P: AsRef<Path>, W: Write>(path: P, out: W) -> bmp_ascii::Result<()> {
    let path = path.as_ref();
    log::info!("rendering {}", path.display());
    render_file(path, &RenderConfig::default(), io::BufWriter::new(out))
}
