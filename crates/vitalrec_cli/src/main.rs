//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `vitalrec_core` linkage.
//! - Decode one registration number from the command line for quick
//!   manual checks against the ledger scheme.

use vitalrec_core::locator::{codec, parse};
use vitalrec_core::LocatorError;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() == 2 {
        match decode_line(&args[0], &args[1]) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("vitalrec_core ping={}", vitalrec_core::ping());
    println!("vitalrec_core version={}", vitalrec_core::core_version());
}

fn decode_line(year_text: &str, regnum_text: &str) -> Result<String, LocatorError> {
    let year = parse::parse_year(year_text)?;
    let seq = parse::parse_sequence(regnum_text)?;
    let locator = codec::decode(year, seq)?;
    Ok(match locator.position {
        Some(position) => format!(
            "regnum={} volume={} page={} column={}",
            codec::pad_to_5(locator.sequence),
            position.volume,
            position.page,
            position.column
        ),
        None => format!("regnum={}", codec::pad_to_5(locator.sequence)),
    })
}
