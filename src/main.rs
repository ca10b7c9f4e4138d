use clap::Parser;
use std::path::PathBuf;

use ccitt16::Convention;
use ccitt16::input::{CliError, checksum_path, parse_convention, parse_hex, parse_u16};
use ccitt16::{TABLE, crc16_compute};

#[derive(Parser, Debug)]
#[command(name = "ccitt16", about = "CRC-16/CCITT (poly 0x1021) checksums")]
struct Args {
    /// Files to checksum. `-` or nothing reads stdin.
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Checksum this hex string instead of reading files.
    #[arg(long, value_name = "HEX", conflicts_with = "inputs")]
    hex: Option<String>,

    /// Seed and final XOR preset: xmodem, ccitt-false, aug-ccitt or genibus.
    #[arg(
        long,
        value_name = "NAME",
        env = "CCITT16_CONVENTION",
        default_value = "xmodem",
        value_parser = parse_convention
    )]
    convention: Convention,

    /// Override the preset's seed (hex with 0x, or decimal).
    #[arg(long, value_name = "SEED", env = "CCITT16_SEED", value_parser = parse_u16)]
    seed: Option<u16>,

    /// Override the preset's final XOR mask.
    #[arg(long, value_name = "MASK", env = "CCITT16_XOROUT", value_parser = parse_u16)]
    xorout: Option<u16>,

    /// Print the 256-entry lookup table and exit.
    #[arg(long)]
    table: bool,
}

/// Seed and final XOR to use: explicit flags win over the preset.
fn resolve_params(args: &Args) -> (u16, u16) {
    (
        args.seed.unwrap_or(args.convention.seed),
        args.xorout.unwrap_or(args.convention.xorout),
    )
}

fn print_table() {
    for (row, chunk) in TABLE.chunks(8).enumerate() {
        let entries: Vec<String> = chunk.iter().map(|v| format!("0x{v:04X}")).collect();
        println!("{:02X}: {}", row * 8, entries.join(" "));
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.table {
        print_table();
        return Ok(());
    }

    let (seed, xorout) = resolve_params(&args);
    log::debug!(
        "Using {} (seed 0x{seed:04X}, xorout 0x{xorout:04X})",
        args.convention.name
    );

    if let Some(hex) = args.hex {
        let data = parse_hex(&hex)?;
        log::debug!("Decoded {} bytes from hex input", data.len());
        let crc = crc16_compute(seed, &data) ^ xorout;
        println!("0x{crc:04X}  <hex>");
        return Ok(());
    }

    let inputs = if args.inputs.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.inputs
    };

    for path in &inputs {
        let (raw, len) = checksum_path(seed, path)?;
        log::info!("{}: {len} bytes", path.display());
        println!("0x{:04X}  {}", raw ^ xorout, path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("ccitt16: {e}");
        std::process::exit(1);
    }
}
