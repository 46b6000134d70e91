use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use slr_app::{AppConfig, AppError, AppResult, ProjectOptions};
use slr_catalog::{Catalog, Identifier};
use slr_core::LengthUnit;
use slr_model::{Projection, ProjectionMode, ScenarioCollection};
use slr_noaa::DataUnits;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slr-cli")]
#[command(about = "Sea level rise projections - browse, project and convert scenario data", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog file replacing the bundled one (JSON or YAML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Treat identifiers as catalog positions
    #[arg(long, global = true)]
    index: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries
    List {
        /// Case-insensitive substring filter
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show the scenarios of one collection
    Show {
        /// Catalog key, location name, or station ID
        id: String,
    },
    /// Project every scenario at a horizon year
    Project {
        id: String,
        #[arg(long)]
        year: f64,
        /// Output units (m, cm, mm, ft, in)
        #[arg(long)]
        units: Option<LengthUnit>,
        /// Leave scenarios that do not cover the year empty
        #[arg(long)]
        lenient: bool,
        /// Merge the projected row into the full table
        #[arg(long)]
        merge: bool,
    },
    /// Print the collection table in other units
    Convert {
        id: String,
        #[arg(long)]
        units: LengthUnit,
    },
    /// Export the collection table as CSV
    Export {
        id: String,
        #[arg(long)]
        units: Option<LengthUnit>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// NOAA projections for a tide station
    Noaa {
        station: String,
        /// Request English units (inches) instead of metric (cm)
        #[arg(long)]
        english: bool,
        #[arg(long)]
        report_year: Option<i32>,
    },
    /// Historical sea level trend for a tide station
    Trend {
        station: String,
        #[arg(long)]
        units: Option<LengthUnit>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            slr_app::load_config(path)?
        }
        None => AppConfig::default(),
    };
    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }

    match cli.command {
        Commands::List { filter } => cmd_list(&config, filter.as_deref()),
        Commands::Show { id } => cmd_show(&config, &id, cli.index),
        Commands::Project {
            id,
            year,
            units,
            lenient,
            merge,
        } => cmd_project(&config, &id, cli.index, year, units, lenient, merge),
        Commands::Convert { id, units } => cmd_convert(&config, &id, cli.index, units),
        Commands::Export { id, units, output } => {
            cmd_export(&config, &id, cli.index, units, output.as_deref())
        }
        Commands::Noaa {
            station,
            english,
            report_year,
        } => cmd_noaa(&config, &station, english, report_year),
        Commands::Trend { station, units } => cmd_trend(&config, &station, units),
    }
}

fn identifier(id: &str, by_index: bool) -> AppResult<Identifier> {
    if by_index {
        id.parse::<usize>()
            .map(Identifier::Index)
            .map_err(|_| AppError::InvalidInput(format!("'{}' is not a catalog position", id)))
    } else {
        Ok(Identifier::from(id))
    }
}

fn open_collection(config: &AppConfig, id: &str, by_index: bool) -> AppResult<ScenarioCollection> {
    let catalog: Catalog = slr_app::open_catalog(config)?;
    slr_app::load_collection(&catalog, identifier(id, by_index)?)
}

fn cmd_list(config: &AppConfig, filter: Option<&str>) -> AppResult<()> {
    let catalog = slr_app::open_catalog(config)?;
    let entries = slr_app::list_collections(&catalog, filter);

    if entries.is_empty() {
        println!("No catalog entries found");
    } else {
        println!("Catalog entries:");
        for (i, entry) in entries.iter().enumerate() {
            println!(
                "  [{}] {} - {} (station {}, {} scenarios)",
                i, entry.key, entry.location_name, entry.station_id, entry.scenario_count
            );
            println!("      {}", entry.issuer);
        }
    }
    Ok(())
}

fn cmd_show(config: &AppConfig, id: &str, by_index: bool) -> AppResult<()> {
    let collection = open_collection(config, id, by_index)?;
    println!("{}", collection);
    if let Some(url) = collection.url() {
        println!("Source: {}", url);
    }
    println!("Units: {}", collection.units_summary());
    println!();
    for scenario in slr_app::describe_scenarios(&collection) {
        println!(
            "  {} ({}) - probability {}, {} to {} [{}]",
            scenario.short_name,
            scenario.description,
            scenario.probability,
            scenario.first_year,
            scenario.last_year,
            scenario.unit
        );
    }
    Ok(())
}

fn cmd_project(
    config: &AppConfig,
    id: &str,
    by_index: bool,
    year: f64,
    units: Option<LengthUnit>,
    lenient: bool,
    merge: bool,
) -> AppResult<()> {
    let collection = open_collection(config, id, by_index)?;
    let mode = if lenient {
        ProjectionMode::Lenient
    } else {
        config.projection_mode()
    };
    let options = ProjectOptions {
        horizon_year: year,
        units: units.or(config.default_units),
        mode,
        merge,
    };

    match slr_app::project(&collection, &options)? {
        Projection::Row(row) => {
            println!("{}", row.name);
            for (name, value) in &row.values {
                match value {
                    Some(v) => println!("  {:<32} {:>10.3}", name, v),
                    None => println!("  {:<32} {:>10}", name, "-"),
                }
            }
        }
        Projection::Table(table) => print!("{}", table),
    }
    Ok(())
}

fn cmd_convert(config: &AppConfig, id: &str, by_index: bool, units: LengthUnit) -> AppResult<()> {
    let collection = open_collection(config, id, by_index)?;
    print!("{}", slr_app::converted_table(&collection, units));
    Ok(())
}

fn cmd_export(
    config: &AppConfig,
    id: &str,
    by_index: bool,
    units: Option<LengthUnit>,
    output: Option<&Path>,
) -> AppResult<()> {
    let collection = open_collection(config, id, by_index)?;
    info!(location = collection.location_name(), "exporting collection");
    let csv = slr_app::export_csv(&collection, units.or(config.default_units), output)?;
    match output {
        Some(path) => println!("✓ Exported {} to {}", collection.location_name(), path.display()),
        None => print!("{}", csv),
    }
    Ok(())
}

fn cmd_noaa(
    config: &AppConfig,
    station: &str,
    english: bool,
    report_year: Option<i32>,
) -> AppResult<()> {
    let provider = slr_app::open_provider(config)?;
    let units = if english {
        DataUnits::English
    } else {
        DataUnits::Metric
    };
    let report_year = report_year.unwrap_or(config.report_year);
    info!(station, %units, report_year, "fetching NOAA projections");
    let collection = slr_app::noaa_collection(&provider, station, units, report_year);
    if collection.is_empty() {
        println!("No NOAA projections available for station {}", station);
        return Ok(());
    }
    println!("{}", collection);
    print!("{}", collection.tabular_view());
    Ok(())
}

fn cmd_trend(config: &AppConfig, station: &str, units: Option<LengthUnit>) -> AppResult<()> {
    let provider = slr_app::open_provider(config)?;
    let unit = units.or(config.default_units).unwrap_or(LengthUnit::Millimeter);
    let trend = slr_app::historical_trend(&provider, station, unit)?;
    let series = trend.timeseries()?;

    for (label, value) in trend.properties() {
        println!("  {:<12} {}", label, value);
    }
    println!(
        "  {:<12} {:.3} {} ({} to {})",
        "Change",
        series.y()[series.len() - 1] - series.y()[0],
        series.unit(),
        series.first_year(),
        series.last_year()
    );
    Ok(())
}
