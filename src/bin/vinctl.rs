//! Command-line VIN decoder.
//!
//! Runs the same decoding pipeline as the HTTP service, locally and without
//! a cache.
//!
//! # Usage
//!
//! ```bash
//! # Decode a VIN (prompts for one when omitted)
//! cargo run --bin vinctl -- decode WVWZZZ1JZXW000001
//!
//! # Machine-readable output with a fixed reference year
//! cargo run --bin vinctl -- decode WVWZZZ1JZXW000001 --json --reference-year 2026
//!
//! # Structural check and display form
//! cargo run --bin vinctl -- validate WVWZZZ1JZXW000001
//! cargo run --bin vinctl -- format WVWZZZ1JZXW000001
//!
//! # List known manufacturer prefixes
//! cargo run --bin vinctl -- wmi W
//! ```
//!
//! # Environment Variables
//!
//! - `REFERENCE_YEAR` (optional): default for `--reference-year`

use vin_decoder::api::dto::vin::LookupResponse;
use vin_decoder::config::{MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR};
use vin_decoder::domain::decoding::VinDecoder;
use vin_decoder::domain::decoding::manufacturer::{WMI_TABLE, country_of_origin, region};
use vin_decoder::domain::entities::VehicleRecord;
use vin_decoder::{format_for_display, validate_structure};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// Offline VIN decoding tool.
#[derive(Parser)]
#[command(name = "vinctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a VIN into a vehicle record
    Decode {
        /// VIN to decode (prompted for when omitted)
        vin: Option<String>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,

        /// Year used for model-year disambiguation and vehicle age
        #[arg(
            long,
            env = "REFERENCE_YEAR",
            value_parser = clap::value_parser!(i32).range(MIN_REFERENCE_YEAR as i64..=MAX_REFERENCE_YEAR as i64)
        )]
        reference_year: Option<i32>,
    },

    /// Check whether a string is a structurally valid VIN
    Validate { vin: String },

    /// Print a VIN in WMI-VDS-VIS form
    Format { vin: String },

    /// List known manufacturer prefixes
    Wmi {
        /// Only show prefixes starting with this text
        prefix: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            vin,
            json,
            reference_year,
        } => decode(vin, json, reference_year)?,
        Commands::Validate { vin } => validate(&vin),
        Commands::Format { vin } => println!("{}", format_for_display(&vin)),
        Commands::Wmi { prefix } => list_wmi(prefix.as_deref()),
    }

    Ok(())
}

/// Decodes one VIN and prints it as a table or JSON.
fn decode(vin: Option<String>, json: bool, reference_year: Option<i32>) -> Result<()> {
    let vin = match vin {
        Some(v) => v,
        None => Input::<String>::new()
            .with_prompt("VIN")
            .validate_with(|input: &String| {
                if validate_structure(input) {
                    Ok(())
                } else {
                    Err("17 characters, A-Z and 0-9 without I, O, Q")
                }
            })
            .interact_text()?,
    };

    let decoder = match reference_year {
        Some(year) => VinDecoder::new(year),
        None => VinDecoder::current(),
    };

    let record = decoder
        .lookup(&vin)
        .with_context(|| format!("'{}' is not a valid VIN", vin))?;

    if json {
        let response = LookupResponse::new(vin, record);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match record {
        Some(record) => print_record(&record, decoder.reference_year()),
        None => {
            println!(
                "{} {}",
                "⚠️  No manufacturer data for".yellow(),
                format_for_display(&vin).bright_white()
            );
        }
    }

    Ok(())
}

/// Prints a decoded record grouped by section.
fn print_record(record: &VehicleRecord, reference_year: i32) {
    println!(
        "{} {}",
        "🚗".bright_blue(),
        format_for_display(&record.vin).bright_white().bold()
    );
    println!(
        "{}",
        format!("   reference year {}", reference_year).bright_black()
    );
    println!();

    section("Vehicle");
    field("Manufacturer", &record.manufacturer);
    field(
        "Origin",
        &format!("{} ({})", record.country_of_origin, record.region),
    );
    field("Model", &record.model);
    if let Some(generation) = &record.generation {
        field("Generation", generation);
    }
    field("Year", &record.production_year.to_string());
    field("Seats", &record.seats.to_string());

    section("Drivetrain");
    field("Version", &record.version);
    field("Fuel", &record.fuel_type.to_string());
    if record.displacement_cc > 0 {
        field("Displacement", &format!("{} cc", record.displacement_cc));
    }
    field("Power", &format!("{} hp", record.power_hp));
    field("Transmission", &record.transmission.to_string());
    field("Drive", &record.drive_type.to_string());

    section("Appearance");
    field("Color", &record.color);
    field("Paint", &record.paint_finish);

    section("History");
    field("Mileage", &format!("{} km", record.mileage_km));
    field("Condition", &record.condition.to_string());
    field("Accidents", &record.accident_status.to_string());
    field("Damage", &record.damage_status.to_string());
    flag("Imported", record.imported);
    flag("Registered in Poland", record.registered_in_poland);
    flag("First owner", record.first_owner);
    flag("Disabled adapted", record.disabled_adapted);
    field("Plate", &record.registration_plate);
    println!();
}

fn section(title: &str) {
    println!();
    println!("  {}", title.bright_white().bold());
    println!("  {}", "─".repeat(40).bright_black());
}

fn field(label: &str, value: &str) {
    println!("  {:<22} {}", label.bright_black(), value.cyan());
}

fn flag(label: &str, value: bool) {
    let rendered = if value { "yes".green() } else { "no".red() };
    println!("  {:<22} {}", label.bright_black(), rendered);
}

fn validate(vin: &str) {
    if validate_structure(vin) {
        println!(
            "{} {}",
            "✅ Valid:".green().bold(),
            format_for_display(vin).bright_white()
        );
    } else {
        println!("{} {}", "❌ Invalid:".red().bold(), vin.bright_white());
    }
}

/// Lists the WMI table, optionally filtered by prefix.
///
/// # Output Format
///
/// ```text
///   WMI  Manufacturer         Country          Region
///   ──────────────────────────────────────────────────────────
///   WVW  Volkswagen           Germany          Europe
/// ```
fn list_wmi(prefix: Option<&str>) {
    let prefix = prefix.map(str::to_ascii_uppercase).unwrap_or_default();

    let mut rows: Vec<_> = WMI_TABLE
        .iter()
        .filter(|(wmi, _)| wmi.starts_with(&prefix))
        .collect();
    rows.sort_by_key(|(wmi, _)| *wmi);

    if rows.is_empty() {
        println!("{}", "  No matching prefixes".yellow());
        return;
    }

    println!(
        "  {:<4} {:<20} {:<16} {}",
        "WMI".bright_white().bold(),
        "Manufacturer".bright_white().bold(),
        "Country".bright_white().bold(),
        "Region".bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for (wmi, name) in &rows {
        let country = country_of_origin(wmi);
        println!(
            "  {:<4} {:<20} {:<16} {}",
            wmi.bright_cyan(),
            name,
            country,
            region(country).to_string().bright_black()
        );
    }

    println!();
    println!("  Total: {}", rows.len().to_string().bright_white().bold());
}
