#![forbid(unsafe_code)]

//! # Pitchtunnel
//!
//! ```bash
//! pitchtunnel simulate --preset slider
//! pitchtunnel compare --config arsenal.toml --format json
//! pitchtunnel presets
//! ```

use std::io::{self, Write};

use pitchtunnel_cli::cli::Cli;
use pitchtunnel_cli::{logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush()?;

    Ok(())
}
