//! Location resolution orchestrator
//!
//! Turns a place name, a raw coordinate or the device position into one
//! [`WeatherSnapshot`]. Current conditions are a hard prerequisite; the
//! forecast and the air quality index are fetched concurrently afterwards
//! and degrade to their empty values when they fail.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use domain::{
    AirQualityIndex, Coordinate, ForecastSeries, LocationQuery, ResolutionError, ResolvedPlace,
    SnapshotPart, UnitSystem, WeatherSnapshot,
};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::ports::{
    AirQualityPort, CurrentWeatherPort, DeviceLocationPort, ForecastPort, GeocodingPort,
};

/// Default per-request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// City used when the device position is unavailable at startup
pub const DEFAULT_FALLBACK_CITY: &str = "Bangalore";

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    /// Upper bound for every single upstream call
    pub request_timeout: Duration,
    /// Place resolved instead of the device position when that is unavailable
    pub fallback_city: Option<String>,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            fallback_city: Some(DEFAULT_FALLBACK_CITY.to_string()),
        }
    }
}

/// What to do when the device position cannot be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Resolve the configured fallback city instead (startup auto-detection)
    FallbackCity,
    /// Report the failure to the caller (explicit "use my location")
    ReportFailure,
}

/// Orchestrates geocoding and the three weather fetches
pub struct LocationResolutionService {
    config: ResolutionConfig,
    geocoder: Arc<dyn GeocodingPort>,
    weather: Arc<dyn CurrentWeatherPort>,
    forecast: Arc<dyn ForecastPort>,
    air_quality: Arc<dyn AirQualityPort>,
    device: Option<Arc<dyn DeviceLocationPort>>,
}

impl std::fmt::Debug for LocationResolutionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationResolutionService")
            .field("config", &self.config)
            .field("geocoder", &"<GeocodingPort>")
            .field("weather", &"<CurrentWeatherPort>")
            .field("forecast", &"<ForecastPort>")
            .field("air_quality", &"<AirQualityPort>")
            .field("device", &self.device.is_some())
            .finish()
    }
}

impl LocationResolutionService {
    /// Create a new orchestrator without device location support
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        weather: Arc<dyn CurrentWeatherPort>,
        forecast: Arc<dyn ForecastPort>,
        air_quality: Arc<dyn AirQualityPort>,
    ) -> Self {
        Self {
            config: ResolutionConfig::default(),
            geocoder,
            weather,
            forecast,
            air_quality,
            device: None,
        }
    }

    /// Set the orchestrator configuration
    #[must_use]
    pub fn with_config(mut self, config: ResolutionConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a device location provider
    #[must_use]
    pub fn with_device_location(mut self, device: Arc<dyn DeviceLocationPort>) -> Self {
        self.device = Some(device);
        self
    }

    /// Current configuration
    #[must_use]
    pub const fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Resolve either kind of query
    pub async fn resolve(
        &self,
        query: &LocationQuery,
        unit: UnitSystem,
    ) -> Result<WeatherSnapshot, ResolutionError> {
        match query {
            LocationQuery::ByName(name) => self.resolve_by_name(name, unit).await,
            LocationQuery::ByCoordinate(coordinate) => {
                self.resolve_by_coordinate(*coordinate, unit).await
            },
        }
    }

    /// Geocode `name` and resolve the best match
    ///
    /// A blank name fails with `LocationNotFound` without any upstream call.
    #[instrument(skip(self))]
    pub async fn resolve_by_name(
        &self,
        name: &str,
        unit: UnitSystem,
    ) -> Result<WeatherSnapshot, ResolutionError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Rejecting blank place name");
            return Err(ResolutionError::not_found(name));
        }

        let place = self.bounded("geocoding", self.geocoder.geocode(name)).await?;
        debug!(
            display_name = %place.display_name,
            coordinate = %place.coordinate,
            "Geocoded place name"
        );
        self.resolve_place(&place, unit).await
    }

    /// Resolve a raw coordinate
    pub async fn resolve_by_coordinate(
        &self,
        coordinate: Coordinate,
        unit: UnitSystem,
    ) -> Result<WeatherSnapshot, ResolutionError> {
        self.assemble(coordinate, unit, None).await
    }

    /// Resolve an already geocoded place
    ///
    /// The place's display name is used when the weather provider reports
    /// none for the coordinate.
    pub async fn resolve_place(
        &self,
        place: &ResolvedPlace,
        unit: UnitSystem,
    ) -> Result<WeatherSnapshot, ResolutionError> {
        self.assemble(place.coordinate, unit, Some(&place.display_name))
            .await
    }

    /// Resolve the device position
    ///
    /// With [`FallbackPolicy::FallbackCity`] a denied or unavailable position
    /// resolves the configured fallback city instead. Without a fallback the
    /// failure is returned unchanged; a missing provider counts as
    /// `PermissionDenied`.
    #[instrument(skip(self))]
    pub async fn resolve_from_device(
        &self,
        unit: UnitSystem,
        policy: FallbackPolicy,
    ) -> Result<WeatherSnapshot, ResolutionError> {
        match self.device_position().await {
            Ok(coordinate) => {
                debug!(coordinate = %coordinate, "Using device position");
                self.resolve_by_coordinate(coordinate, unit).await
            },
            Err(err) => match (policy, self.fallback_city()) {
                (FallbackPolicy::FallbackCity, Some(city)) => {
                    info!(error = %err, city = %city, "Device position unavailable, using fallback city");
                    self.resolve_by_name(city, unit).await
                },
                _ => {
                    warn!(error = %err, "Device position unavailable");
                    Err(err)
                },
            },
        }
    }

    async fn device_position(&self) -> Result<Coordinate, ResolutionError> {
        let Some(ref device) = self.device else {
            return Err(ResolutionError::PermissionDenied);
        };
        self.bounded("device location", device.current_position())
            .await
    }

    fn fallback_city(&self) -> Option<&str> {
        self.config
            .fallback_city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    #[instrument(skip(self, name_hint))]
    async fn assemble(
        &self,
        coordinate: Coordinate,
        unit: UnitSystem,
        name_hint: Option<&str>,
    ) -> Result<WeatherSnapshot, ResolutionError> {
        let mut current = self
            .bounded("current weather", self.weather.fetch_current(&coordinate, unit))
            .await?;

        // All parts of a snapshot describe the requested point.
        current.coordinate = coordinate;
        if current.display_name.trim().is_empty() {
            current.display_name = name_hint
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map_or_else(|| coordinate.label(), str::to_string);
        }

        let (forecast, air_quality) = tokio::join!(
            self.bounded("forecast", self.forecast.fetch_forecast(&coordinate, unit)),
            self.bounded(
                "air quality",
                self.air_quality.fetch_air_quality(&coordinate)
            ),
        );

        let mut missing = Vec::new();
        let forecast = match forecast {
            Ok(series) => series,
            Err(err) => {
                warn!(error = %err, "Forecast unavailable, continuing without it");
                missing.push(SnapshotPart::Forecast);
                ForecastSeries::empty()
            },
        };
        let air_quality = match air_quality {
            Ok(index) => index,
            Err(err) => {
                warn!(error = %err, "Air quality unavailable, continuing without it");
                missing.push(SnapshotPart::AirQuality);
                AirQualityIndex::Unknown
            },
        };

        let snapshot = missing.into_iter().fold(
            WeatherSnapshot::new(current, unit, forecast, air_quality),
            WeatherSnapshot::with_missing,
        );
        info!(
            display_name = %snapshot.current().display_name,
            forecast_points = snapshot.forecast().len(),
            air_quality = %snapshot.air_quality(),
            degraded = snapshot.is_degraded(),
            "Resolved weather snapshot"
        );
        Ok(snapshot)
    }

    /// Run one upstream call under the per-request timeout
    async fn bounded<T>(
        &self,
        what: &'static str,
        call: impl Future<Output = Result<T, ResolutionError>> + Send,
    ) -> Result<T, ResolutionError> {
        let limit = self.config.request_timeout;
        if let Ok(result) = timeout(limit, call).await {
            result
        } else {
            warn!(request = what, timeout = ?limit, "Request timed out");
            Err(ResolutionError::network(format!(
                "{what} request timed out after {}ms",
                limit.as_millis()
            )))
        }
    }
}
