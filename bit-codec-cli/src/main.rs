use anyhow::Context;
use bit_codec::bits::{conv_i8, conv_i16, conv_i32, conv_i64};
use bit_codec::{
    NumericFamily, NumericKind, NumericValue, combine_bytes, decode_hex, encode_hex, parse_value,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "bit-codec", author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, env = "BIT_CODEC_OUTPUT", value_enum, default_value_t = OutputFormat::Plain, global = true)]
    output: OutputFormat,

    /// Subcommand/tool to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a numeric literal as little-endian bytes and print them as hex
    Encode {
        /// One of u8, u16, u32, u64, i8, i16, i32, i64, f32, f64
        kind: NumericKind,
        /// Decimal literal (integers also accept a 0x-prefixed bit pattern)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode hex text holding a little-endian value of the given kind
    Decode {
        /// One of u8, u16, u32, u64, i8, i16, i32, i64, f32, f64
        kind: NumericKind,
        /// Hex text, two digits per byte
        hex: String,
    },
    /// Concatenate several hex byte strings
    Concat {
        #[arg(required = true)]
        hex: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum OutputFormat {
    Plain,
    Json,
}

/// The result of one subcommand, tagged with the subcommand name in JSON output.
#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "command", rename_all = "lowercase")]
enum Report {
    Encode {
        kind: NumericKind,
        hex: String,
        value: NumericValue,
    },
    Decode {
        kind: NumericKind,
        hex: String,
        value: NumericValue,
    },
    Concat {
        hex: String,
        len: usize,
    },
}

impl Report {
    fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Plain => Ok(match self {
                Report::Encode { hex, .. } | Report::Concat { hex, .. } => hex.clone(),
                Report::Decode { value, .. } => value.to_string(),
            }),
        }
    }
}

/// Parses an integer literal, either decimal or a `0x`/`0X`-prefixed bit pattern.
macro_rules! parse_int_literal {
    ($input:expr, $native:ty, $pattern:ty, $from_bits:expr) => {
        match $input
            .strip_prefix("0x")
            .or_else(|| $input.strip_prefix("0X"))
        {
            Some(digits) => <$pattern>::from_str_radix(digits, 16).map($from_bits),
            None => $input.parse::<$native>(),
        }
    };
}

fn parse_literal(kind: NumericKind, input: &str) -> anyhow::Result<NumericValue> {
    let expected = match kind.family() {
        NumericFamily::Float => "a decimal number",
        NumericFamily::Unsigned | NumericFamily::Signed => {
            "a decimal number or a 0x-prefixed hex bit pattern"
        }
    };
    let context = || format!("`{input}` is not a valid {kind} literal; expected {expected}");
    let value = match kind {
        NumericKind::U8 => NumericValue::U8(
            parse_int_literal!(input, u8, u8, |v| v).with_context(context)?,
        ),
        NumericKind::U16 => NumericValue::U16(
            parse_int_literal!(input, u16, u16, |v| v).with_context(context)?,
        ),
        NumericKind::U32 => NumericValue::U32(
            parse_int_literal!(input, u32, u32, |v| v).with_context(context)?,
        ),
        NumericKind::U64 => NumericValue::U64(
            parse_int_literal!(input, u64, u64, |v| v).with_context(context)?,
        ),
        NumericKind::I8 => NumericValue::I8(
            parse_int_literal!(input, i8, u8, conv_i8::from_bits).with_context(context)?,
        ),
        NumericKind::I16 => NumericValue::I16(
            parse_int_literal!(input, i16, u16, conv_i16::from_bits).with_context(context)?,
        ),
        NumericKind::I32 => NumericValue::I32(
            parse_int_literal!(input, i32, u32, conv_i32::from_bits).with_context(context)?,
        ),
        NumericKind::I64 => NumericValue::I64(
            parse_int_literal!(input, i64, u64, conv_i64::from_bits).with_context(context)?,
        ),
        NumericKind::F32 => NumericValue::F32(input.parse().with_context(context)?),
        NumericKind::F64 => NumericValue::F64(input.parse().with_context(context)?),
    };
    Ok(value)
}

fn run(command: Commands) -> anyhow::Result<Report> {
    match command {
        Commands::Encode { kind, value } => {
            let value = parse_literal(kind, &value)?;
            debug!(%kind, %value, "Encoding value");
            Ok(Report::Encode {
                kind,
                hex: encode_hex(value.to_le_vec()),
                value,
            })
        }
        Commands::Decode { kind, hex } => {
            let value = parse_value(&hex, kind)
                .with_context(|| format!("Failed to decode `{hex}` as {kind}"))?;
            debug!(%kind, %value, "Decoded value");
            Ok(Report::Decode { kind, hex, value })
        }
        Commands::Concat { hex } => {
            let parts = hex
                .iter()
                .map(|text| decode_hex(text).with_context(|| format!("Invalid hex input `{text}`")))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let combined = combine_bytes(&parts);
            debug!(parts = parts.len(), len = combined.len(), "Combined byte strings");
            Ok(Report::Concat {
                hex: encode_hex(&combined),
                len: combined.len(),
            })
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        // Standard logger, configured via the RUST_LOG env variable.
        // Writes to stderr so stdout only carries results.
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();
    info!(output = ?cli.output, "Starting");

    let report = run(cli.command)?;
    println!("{}", report.render(cli.output)?);
    Ok(())
}
