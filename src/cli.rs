use clap::Parser;

/// Default mount path sampled each iteration. CodeBuild mounts the build
/// output volume here.
pub const DEFAULT_MOUNT_PATH: &str = "/codebuild/output";

/// Default seconds between samples.
pub const DEFAULT_INTERVAL_SECS: u64 = 20;

#[derive(Parser, Debug)]
#[command(name = "buildwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Samples disk usage of a CodeBuild container and publishes it to CloudWatch", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = DEFAULT_MOUNT_PATH, help = "Mount path whose usage is sampled")]
    pub path: String,

    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS, help = "Seconds between samples")]
    pub interval_secs: u64,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
