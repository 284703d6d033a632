use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod cli_commands;

/// Inspect and convert Well-Known-Text geometries
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a WKT geometry and print some details about it
    Show {
        /// WKT literal, or a path when --file is given
        input: String,
        /// Read the WKT from the file at INPUT
        #[arg(long)]
        file: bool,
        /// Reject anything after the geometry
        #[arg(long)]
        strict: bool,
    },
    /// Convert a WKT geometry to GeoJSON
    Geojson {
        /// WKT literal, or a path when --file is given
        input: String,
        /// Read the WKT from the file at INPUT
        #[arg(long)]
        file: bool,
        /// Reject anything after the geometry
        #[arg(long)]
        strict: bool,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
        /// Wrap the geometry in a GeoJSON Feature
        #[arg(long)]
        feature: bool,
        /// Feature property as key=value (implies --feature)
        #[arg(long = "property", value_parser = cli_commands::parse_property)]
        properties: Vec<(String, serde_json::Value)>,
        /// Save the output here instead of printing it
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the coordinates of a POINT geometry as lat/lon
    Point {
        /// WKT literal of a point
        input: String,
    },
}

fn run(cli: Cli) -> spatialwkt::core::GeomResult<()> {
    match cli.command {
        Command::Show {
            input,
            file,
            strict,
        } => {
            let wkt = cli_commands::read_input(&input, file)?;
            cli_commands::parse_show_detail(&wkt, strict)
        }
        Command::Geojson {
            input,
            file,
            strict,
            pretty,
            feature,
            properties,
            output,
        } => {
            let wkt = cli_commands::read_input(&input, file)?;
            cli_commands::convert_to_geojson(&wkt, strict, pretty, feature, properties, output)
        }
        Command::Point { input } => cli_commands::show_point(&input),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
