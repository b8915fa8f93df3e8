//! Generate the Mac Roman to UTF-8 lookup table as C source on stdout.
//!
//! Usage:
//!   cargo run -- [--config lut.toml] [--input macroman.txt]
//!
//! A bare path argument is treated as `--input`. `LUT_CONFIG` names a
//! config file when `--config` is absent. Logs go to stderr (`RUST_LOG`).

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use macroman_lut::config::Config;
use tracing_subscriber::EnvFilter;

struct Args {
    config: Option<String>,
    input: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut config = std::env::var("LUT_CONFIG").ok();
    let mut input = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => config = Some(args.next().context("--config needs a value")?),
            "--input" => input = Some(PathBuf::from(args.next().context("--input needs a value")?)),
            other if other.starts_with("--") => anyhow::bail!("unknown flag: {other}"),
            path => {
                if input.is_some() {
                    anyhow::bail!("more than one input path given");
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Args { config, input })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => Config::default(),
    };

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.input.path));

    let text = macroman_lut::generate(&input, &config.output, &config.format)
        .with_context(|| format!("failed to generate table from {}", input.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes()).context("writing table to stdout")?;
    out.flush().context("flushing stdout")?;

    tracing::info!("wrote {} bytes of table source for {}", text.len(), input.display());
    Ok(())
}
