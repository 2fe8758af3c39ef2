use std::path::PathBuf;
use std::process::ExitCode;

use infrascope::config::{Config, DEFAULT_CONFIG_PATH};
use infrascope::ingest::DataProvider;
use infrascope::logging::{self, DataSource};
use infrascope::model::RiskQuery;
use infrascope::verify;

const USAGE: &str = "usage: infrascope [--config PATH] summary | risk <lat> <lon> | warnings | verify";

enum Command {
    Summary,
    Risk(RiskQuery),
    Warnings,
    Verify,
}

fn parse_args(mut args: Vec<String>) -> Result<(PathBuf, Command), String> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            return Err("--config needs a path".to_string());
        }
        config_path = PathBuf::from(args.remove(1));
        args.remove(0);
    }

    let parse_coord = |s: &String, name: &str| -> Result<f64, String> {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("{} must be a finite number, got '{}'", name, s))
    };

    let command = match args.as_slice() {
        [] => Command::Summary,
        [cmd] if cmd == "summary" => Command::Summary,
        [cmd] if cmd == "warnings" => Command::Warnings,
        [cmd] if cmd == "verify" => Command::Verify,
        [cmd, lat, lon] if cmd == "risk" => {
            Command::Risk(RiskQuery::new(parse_coord(lat, "lat")?, parse_coord(lon, "lon")?))
        }
        _ => return Err(USAGE.to_string()),
    };
    Ok((config_path, command))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (config_path, command) = parse_args(std::env::args().skip(1).collect())?;

    let config = Config::load(&config_path)?;
    logging::init_logger(
        config.logging.min_level()?,
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );
    logging::debug(
        DataSource::System,
        None,
        &format!("Loaded config from {}", config_path.display()),
    );

    match command {
        Command::Verify => {
            let client = reqwest::blocking::Client::builder()
                .timeout(config.provider.timeout())
                .connect_timeout(config.provider.connect_timeout())
                .build()?;
            verify::print_report(&verify::verify_all(&client));
        }
        Command::Summary => {
            let mut provider = DataProvider::from_config(&config.provider)?;
            let snapshot = provider.snapshot();
            println!("{}", snapshot.summary().summary);
        }
        Command::Risk(query) => {
            let mut provider = DataProvider::from_config(&config.provider)?;
            let snapshot = provider.snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot.risk_at(query))?);
        }
        Command::Warnings => {
            let mut provider = DataProvider::from_config(&config.provider)?;
            println!("{}", serde_json::to_string_pretty(&provider.weather_warnings())?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("infrascope: {}", e);
            ExitCode::FAILURE
        }
    }
}
