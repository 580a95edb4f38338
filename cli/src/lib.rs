pub mod perc_commands;
pub mod pipeline;
pub mod union_client;

use definitions::ThresholdReport;
use std::io::Write;

/// Convert an error of the library into an I/O error.
pub fn invalid_input(why: percolation::PercolationError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, why)
}

/// Write the report in one line, either as JSON or as a tab-separated line.
pub fn write_report<W: Write>(
    wtr: &mut W,
    report: &ThresholdReport,
    json: bool,
) -> std::io::Result<()> {
    if json {
        serde_json::ser::to_writer(&mut *wtr, report)?;
        writeln!(wtr)
    } else {
        writeln!(wtr, "{}", report)
    }
}

/// Parse a number with an optional SI prefix, such as 200k or 1.5M.
pub fn parse_si(input: &str) -> Result<usize, String> {
    let mut input = input.trim().to_string();
    let last = input
        .chars()
        .last()
        .ok_or_else(|| "empty number".to_string())?;
    let mult = match last {
        'k' | 'K' => 1_000,
        'm' | 'M' => 1_000_000,
        'g' | 'G' => 1_000_000_000,
        '0'..='9' => 1,
        _ => return Err(format!("si prefix {} is not supported yet.", last)),
    };
    if last.is_ascii_alphabetic() {
        input.pop();
    }
    let number = input.parse::<f64>().map_err(|why| format!("{}:{}", input, why))?;
    Ok((number * mult as f64).round() as usize)
}
