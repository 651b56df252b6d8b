use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webshot")]
#[command(
    version,
    about = "HTTP screenshot service backed by headless Chromium",
    long_about = "Webshot\n\nServes GET /screenshot?url=...&width=...&height=...&fullpage=true&networkidle=true\nand responds with a PNG capture of the rendered page. Width/height outside\n(0,3840]x(0,2160] fall back to 1280x720 per axis; boolean flags must be the\nliteral string \"true\"."
)]
pub struct Args {
    #[arg(long, default_value = "8080", help = "Port to listen on")]
    pub port: u16,

    #[arg(
        long,
        default_value = "30",
        value_name = "SECONDS",
        help = "Hard wall-clock deadline for one capture, launch through screenshot"
    )]
    pub deadline: u64,

    #[arg(
        long,
        default_value = "500",
        value_name = "MILLIS",
        help = "Quiet time required before the network counts as idle"
    )]
    pub idle_duration: u64,

    #[arg(
        long,
        default_value = "2000",
        value_name = "MILLIS",
        help = "Upper bound on the network idle wait before giving up"
    )]
    pub idle_max_wait: u64,

    #[arg(
        long,
        default_value = "2",
        help = "In-flight requests still considered idle (long-poll/analytics slack)"
    )]
    pub idle_tolerance: u32,

    #[arg(
        long,
        value_name = "PATH",
        help = "Chromium executable to launch instead of auto-detection"
    )]
    pub chrome: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
