//! Booster Convert - MTG set dump → simulator booster models
//!
//! Reads a set dump as JSON (stdin or file), converts every eligible set into
//! its booster probability model, and writes the export (stdout or file),
//! most recent set first.

use booster_convert::{checks, convert, UnsatisfiablePolicy};
use clap::Parser;
use std::io::{Read, Write};

/// Converts an MTG set dump into simulator-ready booster composition models
#[derive(Parser, Debug)]
#[command(name = "booster_convert")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file with the set dump (default: read stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file for the converted sets (default: write stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Wrap the output as a mtgJSON(...) callback instead of plain JSON
    #[arg(long, default_value_t = false)]
    jsonp: bool,

    /// Skip sets whose booster cannot be satisfied instead of aborting
    #[arg(long, default_value_t = false)]
    skip_unsatisfiable: bool,

    /// Run the embedded self-checks instead of converting
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.check {
        let failures = checks::run_checks();
        if failures > 0 {
            log::error!("{} check(s) failed", failures);
            std::process::exit(1);
        }
        log::info!("All checks passed");
        return;
    }

    let policy = if args.skip_unsatisfiable {
        UnsatisfiablePolicy::Skip
    } else {
        UnsatisfiablePolicy::FailFast
    };

    if let Err(e) = run(&args, policy) {
        log::error!("Conversion failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, policy: UnsatisfiablePolicy) -> booster_convert::Result<()> {
    let input = match &args.input {
        Some(path) => {
            log::info!("Reading dump from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let output = convert(&input, policy, args.jsonp)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, output)?;
            log::info!("Wrote {}", path);
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(output.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
