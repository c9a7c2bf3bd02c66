//! wordbits CLI: apply bit primitives to values from the command line.

mod parse;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use wordbits::dispatch::{self, Op, Width};
use wordbits::table::{NLZ8, NTZ8, POP8, REV8};

use parse::{parse_value, parse_width};

#[derive(Debug, Parser)]
#[command(name = "wordbits")]
#[command(about = "Bit manipulation primitives for fixed-width integers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count zero bits above the highest set bit
    LeadingZeros(Operand),
    /// Count zero bits below the lowest set bit
    TrailingZeros(Operand),
    /// Count set bits
    OnesCount(Operand),
    /// Minimum number of bits needed to represent the value
    Len(Operand),
    /// Rotate left (negative amounts rotate right)
    RotateLeft(Rotation),
    /// Rotate right (negative amounts rotate left)
    RotateRight(Rotation),
    /// Reverse the order of all bits
    Reverse(Operand),
    /// Reverse the order of bytes (16, 32 and 64 bits only)
    ReverseBytes(Operand),
    /// Print the per-byte lookup table
    Table(TableArgs),
}

#[derive(Debug, Args)]
struct Operand {
    /// Value to operate on (decimal, 0x hex, 0b binary, 0o octal; `_` allowed)
    #[arg(value_parser = parse_value)]
    value: u64,

    /// Operand width in bits: 8, 16, 32, 64 or native
    #[arg(short, long, default_value = "64", value_parser = parse_width)]
    width: Width,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct Rotation {
    #[command(flatten)]
    operand: Operand,

    /// Rotation amount; reduced modulo the width
    #[arg(short = 'k', long = "by", default_value = "1", allow_hyphen_values = true)]
    by: isize,
}

#[derive(Debug, Args)]
struct TableArgs {
    /// Print the table as a JSON array
    #[arg(long)]
    json: bool,
}

/// One evaluated primitive, as printed by `--json`.
#[derive(Debug, Serialize)]
struct Report {
    op: Op,
    width: u32,
    input: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<isize>,
    result: u64,
}

/// One row of the byte table, as printed by `table --json`.
#[derive(Debug, Serialize)]
struct TableRow {
    value: u8,
    nlz: u8,
    ntz: u8,
    pop: u8,
    rev: u8,
}

fn run(op: Op, operand: &Operand, amount: isize) -> Result<()> {
    let result = dispatch::evaluate(op, operand.width, operand.value, amount)
        .with_context(|| format!("{} failed for {:#x}", op, operand.value))?;

    if operand.json {
        let report = Report {
            op,
            width: operand.width.bits(),
            input: operand.value,
            amount: op.takes_amount().then_some(amount),
            result,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", format_result(op, operand.width, result));
    }

    Ok(())
}

/// Counts print in decimal; bit patterns print as zero-padded hex.
fn format_result(op: Op, width: Width, result: u64) -> String {
    if op.returns_count() {
        result.to_string()
    } else {
        let digits = (width.bits() / 4) as usize;
        format!("{:#0w$x}", result, w = digits + 2)
    }
}

fn print_table(json: bool) -> Result<()> {
    let rows: Vec<TableRow> = (0..=255u8)
        .map(|b| {
            let i = b as usize;
            TableRow {
                value: b,
                nlz: NLZ8[i],
                ntz: NTZ8[i],
                pop: POP8[i],
                rev: REV8[i],
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("value nlz ntz pop  rev");
        for row in &rows {
            println!(
                " {:#04x} {:>3} {:>3} {:>3} {:#04x}",
                row.value, row.nlz, row.ntz, row.pop, row.rev
            );
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::LeadingZeros(operand) => run(Op::LeadingZeros, &operand, 0),
        Command::TrailingZeros(operand) => run(Op::TrailingZeros, &operand, 0),
        Command::OnesCount(operand) => run(Op::OnesCount, &operand, 0),
        Command::Len(operand) => run(Op::Len, &operand, 0),
        Command::RotateLeft(rot) => run(Op::RotateLeft, &rot.operand, rot.by),
        Command::RotateRight(rot) => run(Op::RotateRight, &rot.operand, rot.by),
        Command::Reverse(operand) => run(Op::Reverse, &operand, 0),
        Command::ReverseBytes(operand) => run(Op::ReverseBytes, &operand, 0),
        Command::Table(args) => print_table(args.json),
    }
}
