//! Command-line front-end for the JBC station protocol codec.

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jbc_protocol::catalog::{self, Confidence};
use jbc_protocol::{decode, encode, parse_hex, Decoded, DecoderConfig, Family};

use crate::config::ConsoleConfig;

/// Encode console commands and decode station replies.
#[derive(Parser, Debug)]
#[command(name = "jbc-console")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// YAML settings file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a model string or firmware banner to its family.
    Resolve {
        /// Model (`DDE`) or banner (`02:DDE_2C:1.0:2.0`).
        input: String,
    },
    /// Encode one command line.
    Encode {
        /// Target family.
        #[arg(short, long)]
        family: Option<String>,
        /// Command name and arguments.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
    /// Decode one reply payload.
    Decode {
        /// Family the reply came from.
        #[arg(short, long)]
        family: Option<String>,
        /// Command code (`0x50`, `80`) or name (`M_R_SELECTTEMP`).
        #[arg(long)]
        code: String,
        /// Frame id to tag the report with.
        #[arg(long)]
        fid: Option<u32>,
        /// Report keep-alive frames instead of dropping them.
        #[arg(long)]
        show_syn: bool,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
        /// Payload bytes in hex.
        payload: Vec<String>,
    },
    /// List a family's command table.
    Catalog {
        /// Family to list.
        #[arg(short, long)]
        family: Option<String>,
        /// Only write commands.
        #[arg(long)]
        writes: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ConsoleConfig::load(args.config.as_deref())?;
    for line in run(args.command, &config)? {
        println!("{}", line);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .init();
}

/// Family from a backend name, a model string or a banner.
pub(crate) fn parse_family(text: &str) -> Family {
    text.parse().unwrap_or_else(|_| Family::resolve(text))
}

fn family_or_default(flag: Option<&str>, config: &ConsoleConfig) -> Family {
    flag.map_or_else(|| config.default_family(), parse_family)
}

fn parse_code(text: &str, family: Family) -> Result<u8> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).with_context(|| format!("invalid code {}", text));
    }
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse().with_context(|| format!("invalid code {}", text));
    }
    match catalog::lookup(text, family) {
        Some(descriptor) => Ok(descriptor.code),
        None => bail!("unknown command {} for {}", text, family),
    }
}

fn run(command: Command, config: &ConsoleConfig) -> Result<Vec<String>> {
    match command {
        Command::Resolve { input } => {
            let family = Family::resolve(&input);
            Ok(vec![format!("{} -> {}", input.trim(), family)])
        }
        Command::Encode { family, line } => {
            let family = family_or_default(family.as_deref(), config);
            let line = line.join(" ");
            let cmd = encode(&line, family).with_context(|| format!("cannot encode {:?}", line))?;
            Ok(vec![cmd.to_string()])
        }
        Command::Decode {
            family,
            code,
            fid,
            show_syn,
            json,
            payload,
        } => {
            let family = family_or_default(family.as_deref(), config);
            let code = parse_code(&code, family)?;
            let payload = parse_hex(&payload.join(" ")).context("invalid payload hex")?;
            let decoder = DecoderConfig {
                suppress_keepalive: config.decoder.suppress_keepalive && !show_syn,
                correlation_id: fid.or(config.decoder.correlation_id),
            };
            match decode(family, code, &payload, &decoder) {
                Decoded::Suppressed => {
                    tracing::debug!(code, "reply suppressed");
                    Ok(Vec::new())
                }
                Decoded::Report(report) if json => Ok(vec![serde_json::to_string(&report)?]),
                Decoded::Report(report) => Ok(vec![report.to_string()]),
            }
        }
        Command::Catalog { family, writes } => {
            let family = family_or_default(family.as_deref(), config);
            if family == Family::Unknown {
                bail!("catalog needs a concrete family");
            }
            Ok(catalog_listing(family, writes))
        }
    }
}

fn catalog_listing(family: Family, writes_only: bool) -> Vec<String> {
    catalog::entries(family)
        .iter()
        .filter(|d| !writes_only || d.is_write())
        .map(|d| {
            let marker = match d.confidence {
                Confidence::Confirmed => ' ',
                Confidence::Untested => '?',
                Confidence::Alias => '=',
            };
            let (format, usage) = d
                .format
                .map_or(("-", ""), |f| (f.as_str(), f.usage()));
            format!("0x{:02X}{} {:<26} {:<18} {}", d.code, marker, d.name, format, usage)
                .trim_end()
                .to_string()
        })
        .collect()
}
