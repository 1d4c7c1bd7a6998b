//! JANUS application data utility
//! Encodes and decodes class 016/01 application data words and cargo from the command line

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use janus_plugin_016_01::bitwise::{parse_decimal, parse_field_assignment};
use janus_plugin_016_01::codec::{encoded_size_for_index, get_codec_with_config, list_codecs};
use janus_plugin_016_01::core::{APPLICATION_TYPE, APP_DATA_SIZE, CLASS_USER_ID};
use janus_plugin_016_01::{AppFields, CodecConfig};
use serde_json::json;
use std::env;
use tracing_subscriber::{prelude::*, EnvFilter};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [--config <file.json>] <command> [args...]", program);
    eprintln!("\nCommands:");
    eprintln!("  list                                   List registered codec variants");
    eprintln!("  decode <word>                          Decode an application data word (hex 0x... or decimal)");
    eprintln!("  encode <cargo_size> [Name=Value ...]   Encode fields into an application data word");
    eprintln!("  cargo-decode <base64>                  Decode cargo bytes (with CRC-16 trailer)");
    eprintln!("  cargo-encode [Name=Value ...]          Encode Payload/PayloadSize fields into cargo");
    eprintln!("\nExamples:");
    eprintln!("  {} encode 10 StationIdentifier=42 AckRequest=1", program);
    eprintln!("  {} decode 0xa80205", program);
    std::process::exit(1);
}

fn parse_word(text: &str) -> anyhow::Result<u64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid hex word: {}", text)),
        None => parse_decimal(text).ok_or_else(|| anyhow::anyhow!("Invalid word: {}", text)),
    }
}

fn parse_fields(args: &[String]) -> anyhow::Result<AppFields> {
    let mut fields = AppFields::new();
    for arg in args {
        let (name, value) = parse_field_assignment(arg)
            .ok_or_else(|| anyhow::anyhow!("Expected Name=Value, got {:?}", arg))?;
        fields.add_field(name, value);
    }
    Ok(fields)
}

fn main() -> anyhow::Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    let mut args: Vec<String> = env::args().collect();
    let program = args.remove(0);

    let config = if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            usage(&program);
        }
        let path = args.remove(1);
        args.remove(0);
        CodecConfig::load(&path).with_context(|| format!("Loading config {}", path))?
    } else {
        CodecConfig::default()
    };

    let Some(command) = args.first().cloned() else {
        usage(&program);
    };
    let rest = &args[1..];

    let codec = get_codec_with_config(CLASS_USER_ID, APPLICATION_TYPE, config)?;
    tracing::info!("Codec: {}", codec.name());

    let output = match command.as_str() {
        "list" => {
            let codecs: Vec<_> = list_codecs()
                .into_iter()
                .map(|info| {
                    json!({
                        "class_user_id": info.class_user_id,
                        "application_type": info.application_type,
                        "description": info.description,
                    })
                })
                .collect();
            json!(codecs)
        }
        "decode" => {
            let word = rest.first().unwrap_or_else(|| usage(&program));
            let decoded = codec.decode_app_data(parse_word(word)?, APP_DATA_SIZE)?;
            json!({
                "cargo_size_index": decoded.cargo_size_index,
                "encoded_cargo_size": encoded_size_for_index(decoded.cargo_size_index),
                "fields": decoded.fields,
            })
        }
        "encode" => {
            let size = rest.first().unwrap_or_else(|| usage(&program));
            let desired = parse_decimal(size)
                .and_then(|s| usize::try_from(s).ok())
                .ok_or_else(|| anyhow::anyhow!("Invalid cargo size: {}", size))?;
            let fields = parse_fields(&rest[1..])?;
            let encoded = codec.app_data_encode(desired, &fields, APP_DATA_SIZE)?;
            json!({
                "app_data": format!("{:#x}", encoded.app_data),
                "encoded_cargo_size": encoded.cargo_size,
            })
        }
        "cargo-decode" => {
            let encoded = rest.first().unwrap_or_else(|| usage(&program));
            let cargo = STANDARD
                .decode(encoded)
                .with_context(|| format!("Invalid base64 cargo: {}", encoded))?;
            json!({ "fields": codec.decode_cargo(&cargo)? })
        }
        "cargo-encode" => {
            let fields = parse_fields(rest)?;
            let cargo = codec.cargo_encode(&fields)?;
            json!({
                "cargo": STANDARD.encode(&cargo),
                "cargo_size": cargo.len(),
            })
        }
        _ => usage(&program),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
