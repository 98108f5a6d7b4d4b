//! HTTP gateway in front of the weather and city-search providers.
//!
//! Weather and forecast payloads are forwarded untouched. City search is
//! reshaped to `[{name, country}]`. Every failure answers with a JSON
//! `{"error": ...}` body.

pub mod error;

use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use warp::{
    Filter, Rejection,
    filters::BoxedFilter,
    reply::{self, Reply, Response},
};

use crate::{
    data::{
        citysearch::CitySearchClient,
        openweather::{OpenWeatherClient, WeatherQuery},
    },
    domain::weather::CityMatch,
    server::error::GatewayError,
};

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub api_key: String,
    pub weather_url: String,
    pub citysearch_url: String,
    pub static_dir: Option<PathBuf>,
}

impl GatewayConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn upstreams(&self) -> Upstreams {
        Upstreams {
            weather: OpenWeatherClient::with_base_url(&self.weather_url, &self.api_key),
            cities: CitySearchClient::with_base_url(&self.citysearch_url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Upstreams {
    pub weather: OpenWeatherClient,
    pub cities: CitySearchClient,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherParams {
    city: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ForecastParams {
    city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CitySearchParams {
    q: Option<String>,
}

/// Runs the gateway until Ctrl-C.
pub async fn serve(config: GatewayConfig) -> Result<()> {
    let cors = warp::cors().allow_any_origin().allow_methods(vec!["GET"]);
    let routes = routes(config.upstreams(), config.static_dir.clone())
        .with(cors)
        .with(warp::trace::request());

    let (addr, server) =
        warp::serve(routes).try_bind_with_graceful_shutdown(config.addr(), async {
            let _ = tokio::signal::ctrl_c().await;
        })?;

    tracing::info!(%addr, "gateway listening");
    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving static files");
    }
    server.await;
    tracing::info!("gateway stopped");
    Ok(())
}

/// All gateway routes, plus static files when `static_dir` is set.
pub fn routes(upstreams: Upstreams, static_dir: Option<PathBuf>) -> BoxedFilter<(Response,)> {
    let api = api(Arc::new(upstreams));
    match static_dir {
        Some(dir) => api
            .or(warp::get()
                .and(warp::fs::dir(dir))
                .map(|file: warp::fs::File| file.into_response()))
            .unify()
            .boxed(),
        None => api.boxed(),
    }
}

fn api(
    upstreams: Arc<Upstreams>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let weather = warp::path!("api" / "weather")
        .and(warp::get())
        .and(warp::query::<WeatherParams>())
        .and(with_upstreams(Arc::clone(&upstreams)))
        .then(|params: WeatherParams, upstreams: Arc<Upstreams>| async move {
            respond(handle_weather(params, upstreams).await)
        });

    let forecast = warp::path!("api" / "forecast")
        .and(warp::get())
        .and(warp::query::<ForecastParams>())
        .and(with_upstreams(Arc::clone(&upstreams)))
        .then(|params: ForecastParams, upstreams: Arc<Upstreams>| async move {
            respond(handle_forecast(params, upstreams).await)
        });

    let citysearch = warp::path!("api" / "citysearch")
        .and(warp::get())
        .and(warp::query::<CitySearchParams>())
        .and(with_upstreams(upstreams))
        .then(|params: CitySearchParams, upstreams: Arc<Upstreams>| async move {
            respond(handle_city_search(params, upstreams).await)
        });

    weather.or(forecast).unify().or(citysearch).unify()
}

fn with_upstreams(
    upstreams: Arc<Upstreams>,
) -> impl Filter<Extract = (Arc<Upstreams>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&upstreams))
}

fn respond<T: serde::Serialize>(result: Result<T, GatewayError>) -> Response {
    match result {
        Ok(body) => reply::json(&body).into_response(),
        Err(err) => {
            if let GatewayError::Upstream { .. } = &err {
                tracing::error!(error = %err, "upstream request failed");
            }
            err.into_response()
        }
    }
}

async fn handle_weather(
    params: WeatherParams,
    upstreams: Arc<Upstreams>,
) -> Result<Value, GatewayError> {
    let query = WeatherQuery::from_params(
        params.city.as_deref(),
        params.lat.as_deref(),
        params.lon.as_deref(),
    )
    .ok_or(GatewayError::MissingParameter("Missing city or coordinates"))?;

    upstreams
        .weather
        .current(&query)
        .await
        .map_err(|err| GatewayError::upstream("Error fetching weather data", err))
}

async fn handle_forecast(
    params: ForecastParams,
    upstreams: Arc<Upstreams>,
) -> Result<Value, GatewayError> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .ok_or(GatewayError::MissingParameter("Missing city name"))?;

    upstreams
        .weather
        .forecast(city)
        .await
        .map_err(|err| GatewayError::upstream("Error fetching forecast data", err))
}

async fn handle_city_search(
    params: CitySearchParams,
    upstreams: Arc<Upstreams>,
) -> Result<Vec<CityMatch>, GatewayError> {
    let Some(query) = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        return Ok(Vec::new());
    };

    upstreams
        .cities
        .search(query)
        .await
        .map_err(|err| GatewayError::upstream("Error fetching city suggestions", err))
}
