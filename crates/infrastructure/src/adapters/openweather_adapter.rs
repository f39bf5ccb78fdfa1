//! OpenWeatherMap adapter - Implements the geocoding and weather ports
//! using integration_openweather

use application::ports::{AirQualityPort, CurrentWeatherPort, ForecastPort, GeocodingPort};
use async_trait::async_trait;
use domain::{
    AirQualityIndex, Coordinate, CurrentConditions, ForecastPoint, ForecastSeries, Humidity,
    ResolutionError, ResolvedPlace, UnitSystem, WeatherCondition, WeatherIcon,
};
use integration_openweather::{
    CurrentWeather as IntegrationCurrent, ForecastEntry, GeocodedPlace, OpenWeatherClient,
    OpenWeatherConfig, OpenWeatherError, WeatherClient,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap API
///
/// One instance backs all four upstream ports.
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create an adapter with its own HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        Ok(Self::from_client(OpenWeatherClient::new(config)?))
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn from_client(client: OpenWeatherClient) -> Self {
        Self { client }
    }

    /// Map integration errors to the resolution taxonomy
    fn map_error(err: OpenWeatherError) -> ResolutionError {
        match err {
            OpenWeatherError::ConnectionFailed(e) => ResolutionError::NetworkFailure(e),
            OpenWeatherError::Timeout => ResolutionError::network("request timed out"),
            OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ServiceUnavailable(e)
            | OpenWeatherError::ParseError(e) => ResolutionError::UpstreamError(e),
            err @ (OpenWeatherError::RateLimitExceeded
            | OpenWeatherError::Unauthorized
            | OpenWeatherError::InvalidCoordinates) => ResolutionError::upstream(err.to_string()),
        }
    }

    fn map_place(place: GeocodedPlace) -> Result<ResolvedPlace, ResolutionError> {
        let coordinate = Coordinate::new(place.latitude, place.longitude)
            .map_err(|e| ResolutionError::upstream(e.to_string()))?;
        Ok(ResolvedPlace {
            display_name: place.name,
            coordinate,
        })
    }

    /// Convert integration current weather to domain current conditions
    ///
    /// `coordinate` is the requested point; the provider echoes a rounded one.
    fn map_current(
        current: IntegrationCurrent,
        coordinate: Coordinate,
    ) -> Result<CurrentConditions, ResolutionError> {
        let condition = current.condition.ok_or_else(|| {
            ResolutionError::upstream("current weather response has no condition")
        })?;

        Ok(CurrentConditions {
            display_name: current.name,
            coordinate,
            temperature: current.temperature,
            humidity: Humidity::clamped(current.humidity),
            wind_speed: current.wind_speed,
            icon: WeatherIcon::new(condition.icon),
            condition: WeatherCondition {
                code: condition.id,
                group: condition.main,
                description: condition.description,
            },
            observed_at: current.observed_at,
        })
    }

    fn map_forecast_entry(entry: ForecastEntry) -> ForecastPoint {
        let (icon, description) = entry
            .condition
            .map(|c| (c.icon, c.description))
            .unwrap_or_default();
        ForecastPoint {
            timestamp: entry.timestamp,
            temperature: entry.temperature,
            icon: WeatherIcon::new(icon),
            description,
        }
    }
}

#[async_trait]
impl GeocodingPort for OpenWeatherAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, name: &str) -> Result<ResolvedPlace, ResolutionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ResolutionError::not_found(name));
        }

        let places = self
            .client
            .geocode(name, 1)
            .await
            .map_err(Self::map_error)?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| ResolutionError::not_found(name))?;
        debug!(name = %place.name, country = ?place.country, "Geocoded place");

        Self::map_place(place)
    }
}

#[async_trait]
impl CurrentWeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn fetch_current(
        &self,
        coordinate: &Coordinate,
        unit: UnitSystem,
    ) -> Result<CurrentConditions, ResolutionError> {
        let result = self
            .client
            .get_current(coordinate.latitude(), coordinate.longitude(), unit)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    name = %current.name,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        Self::map_current(result?, *coordinate)
    }
}

#[async_trait]
impl ForecastPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn fetch_forecast(
        &self,
        coordinate: &Coordinate,
        unit: UnitSystem,
    ) -> Result<ForecastSeries, ResolutionError> {
        let entries = self
            .client
            .get_forecast(coordinate.latitude(), coordinate.longitude(), unit)
            .await
            .map_err(Self::map_error)?;

        let samples = entries.len();
        let series =
            ForecastSeries::from_samples(entries.into_iter().map(Self::map_forecast_entry).collect());
        debug!(samples, points = series.len(), "Retrieved forecast");
        Ok(series)
    }
}

#[async_trait]
impl AirQualityPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn fetch_air_quality(
        &self,
        coordinate: &Coordinate,
    ) -> Result<AirQualityIndex, ResolutionError> {
        let pollution = self
            .client
            .get_air_pollution(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(Self::map_error)?;

        let index = AirQualityIndex::from_index(pollution.aqi);
        debug!(aqi = pollution.aqi, label = index.label(), "Retrieved air quality");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use integration_openweather::Condition;

    fn adapter() -> OpenWeatherAdapter {
        OpenWeatherAdapter::new(OpenWeatherConfig::new("key")).unwrap()
    }

    fn condition() -> Condition {
        Condition {
            id: 803,
            main: "Clouds".to_string(),
            description: "broken clouds".to_string(),
            icon: "04d".to_string(),
        }
    }

    fn integration_current(condition: Option<Condition>) -> IntegrationCurrent {
        IntegrationCurrent {
            name: "Bengaluru".to_string(),
            latitude: 12.97,
            longitude: 77.59,
            temperature: 28.0,
            humidity: 70,
            wind_speed: 3.1,
            condition,
            observed_at: Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn debug_impl() {
        let debug_str = format!("{:?}", adapter());
        assert!(debug_str.contains("OpenWeatherAdapter"));
        assert!(!debug_str.contains("key"));
    }

    #[test]
    fn map_error_transport_is_network_failure() {
        assert!(matches!(
            OpenWeatherAdapter::map_error(OpenWeatherError::ConnectionFailed("refused".into())),
            ResolutionError::NetworkFailure(_)
        ));
        assert!(matches!(
            OpenWeatherAdapter::map_error(OpenWeatherError::Timeout),
            ResolutionError::NetworkFailure(_)
        ));
    }

    #[test]
    fn map_error_answers_are_upstream_errors() {
        for err in [
            OpenWeatherError::RequestFailed("HTTP 404".into()),
            OpenWeatherError::ServiceUnavailable("HTTP 503".into()),
            OpenWeatherError::ParseError("bad json".into()),
            OpenWeatherError::RateLimitExceeded,
            OpenWeatherError::Unauthorized,
            OpenWeatherError::InvalidCoordinates,
        ] {
            assert!(matches!(
                OpenWeatherAdapter::map_error(err),
                ResolutionError::UpstreamError(_)
            ));
        }
    }

    #[test]
    fn map_current_uses_requested_coordinate() {
        let requested = Coordinate::new(12.9716, 77.5946).unwrap();
        let current =
            OpenWeatherAdapter::map_current(integration_current(Some(condition())), requested)
                .unwrap();

        assert_eq!(current.coordinate, requested);
        assert_eq!(current.display_name, "Bengaluru");
        assert_eq!(current.humidity.value(), 70);
        assert_eq!(current.condition.group_or_default(), "Clouds");
        assert_eq!(current.icon.code(), "04d");
    }

    #[test]
    fn map_current_without_condition_is_upstream_error() {
        let requested = Coordinate::new(12.97, 77.59).unwrap();
        let err = OpenWeatherAdapter::map_current(integration_current(None), requested)
            .unwrap_err();
        assert!(matches!(err, ResolutionError::UpstreamError(_)));
    }

    #[test]
    fn map_forecast_entry_without_condition() {
        let point = OpenWeatherAdapter::map_forecast_entry(ForecastEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap(),
            temperature: 21.5,
            condition: None,
        });
        assert_eq!(point.icon.code(), "");
        assert!(point.description.is_empty());
        assert_eq!(point.weekday_label(), "Mon");
    }

    #[test]
    fn map_place_rejects_out_of_range_coordinates() {
        let place = GeocodedPlace {
            name: "Nowhere".to_string(),
            latitude: 123.0,
            longitude: 0.0,
            country: None,
            state: None,
        };
        assert!(matches!(
            OpenWeatherAdapter::map_place(place),
            Err(ResolutionError::UpstreamError(_))
        ));
    }

    #[tokio::test]
    async fn blank_geocode_makes_no_request() {
        let err = adapter().geocode("  ").await.unwrap_err();
        assert!(matches!(err, ResolutionError::LocationNotFound(_)));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenWeatherAdapter>();
    }
}
