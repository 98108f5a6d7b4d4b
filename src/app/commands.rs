use std::io::{self, Write};

use anyhow::{Result, anyhow};
use chrono::Utc;
use crossterm::{
    cursor::MoveToColumn,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use tokio::sync::mpsc;

use crate::{
    app::{
        clock::ClockState,
        dashboard::{CityReport, Dashboard},
        favorites::{FavoritesSlot, FavoritesStore},
        settings::favorites_path,
    },
    cli::{Cli, Command, FavoritesCommand, coordinates},
    data::{gateway::GatewayClient, geoip::GeoIpClient},
    domain::weather::WeatherSnapshot,
    error::LookupError,
    ui::{
        RenderOptions,
        render::{
            compare_notice, locate_notice, render_comparison, render_favorites, render_report,
            render_suggestions,
        },
    },
};

/// Runs one client command against the gateway and prints the result.
pub async fn execute(cli: &Cli) -> Result<()> {
    let mut dashboard = build_dashboard(cli);
    let options = RenderOptions {
        color: cli.color_capability(),
        asset_base: cli.gateway_url.clone(),
    };

    match &cli.command {
        Command::Serve(_) => Err(anyhow!("serve is not a client command")),
        Command::Weather { city, live, save } => {
            let report = dashboard.search(city).await.map_err(user_error)?;
            print_report(&report, &options);
            if *save {
                let name = &report.weather.city_name;
                if dashboard.add_favorite(name)? {
                    println!("Added {name} to favorites.");
                }
            }
            if *live {
                follow_local_time(&report.weather).await?;
            }
            Ok(())
        }
        Command::Locate { lat, lon, live } => {
            let report = dashboard
                .locate(coordinates(*lat, *lon))
                .await
                .map_err(|err| {
                    tracing::debug!(error = %err, "locate failed");
                    anyhow!(locate_notice(&err))
                })?;
            print_report(&report, &options);
            if *live {
                follow_local_time(&report.weather).await?;
            }
            Ok(())
        }
        Command::Compare { first, second } => {
            let comparison = dashboard.compare(first, second).await.map_err(|err| {
                tracing::debug!(error = %err, "comparison failed");
                anyhow!(compare_notice(&err))
            })?;
            print!("{}", render_comparison(&comparison, &options));
            Ok(())
        }
        Command::Suggest { query } => {
            print!("{}", render_suggestions(&dashboard.suggest(query).await));
            Ok(())
        }
        Command::Favorites(command) => favorites(&mut dashboard, command, &options).await,
    }
}

async fn favorites(
    dashboard: &mut Dashboard<FavoritesSlot>,
    command: &FavoritesCommand,
    options: &RenderOptions,
) -> Result<()> {
    match command {
        FavoritesCommand::List => print!("{}", render_favorites(dashboard.favorites())),
        FavoritesCommand::Add { city } => {
            let city = city.trim();
            if dashboard.add_favorite(city)? {
                println!("Added {city} to favorites.");
            } else {
                println!("{city} is already a favorite.");
            }
        }
        FavoritesCommand::Remove { city } => {
            let city = city.trim();
            if dashboard.remove_favorite(city)? {
                println!("Removed {city} from favorites.");
            } else {
                println!("{city} is not in favorites.");
            }
        }
        FavoritesCommand::Show { city } => {
            let report = dashboard.open_favorite(city).await.map_err(user_error)?;
            print_report(&report, options);
        }
    }
    Ok(())
}

fn build_dashboard(cli: &Cli) -> Dashboard<FavoritesSlot> {
    let path = cli.favorites_file.clone().or_else(favorites_path);
    Dashboard::new(
        GatewayClient::with_base_url(&cli.gateway_url),
        GeoIpClient::new(),
        FavoritesStore::open(FavoritesSlot::from_path(path)),
    )
}

fn print_report(report: &CityReport, options: &RenderOptions) {
    print!(
        "{}",
        render_report(report, Utc::now().timestamp(), options)
    );
}

fn user_error(err: LookupError) -> anyhow::Error {
    tracing::debug!(error = %err, "lookup failed");
    anyhow!(err.notice())
}

/// Keeps rewriting the local-time line until Ctrl-C.
async fn follow_local_time(weather: &WeatherSnapshot) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut clock = ClockState::new(tx);
    clock.start(weather.observation_epoch, weather.timezone_offset_sec);

    let mut stdout = io::stdout();
    writeln!(stdout)?;
    loop {
        tokio::select! {
            Some(reading) = rx.recv() => {
                execute!(
                    stdout,
                    MoveToColumn(0),
                    Clear(ClearType::CurrentLine),
                    Print(format!("  {} now: {}", weather.city_name, reading.local_time))
                )?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    clock.stop();
    writeln!(stdout)?;
    Ok(())
}
