//! Dashboard application state
//!
//! Owns the single "current snapshot" slot and the unit selection. Every
//! user action starts a new generation; results of superseded generations
//! are dropped so a late response never replaces a newer one.

use std::sync::Arc;

use domain::{
    Coordinate, LocationQuery, ResolutionError, ResolvedPlace, UnitSystem, WeatherSnapshot,
};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::generation::{Generation, GenerationTracker};
use super::location_resolution_service::{FallbackPolicy, LocationResolutionService};

/// Resolution state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPhase {
    #[default]
    Idle,
    Resolving,
    Success,
    Failed,
}

/// What the presentation layer renders
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    /// Selected unit system
    pub unit: UnitSystem,
    pub phase: ResolutionPhase,
    /// Last successful snapshot; kept on failure
    pub snapshot: Option<WeatherSnapshot>,
    /// Error of the latest resolution, cleared on success
    pub error: Option<ResolutionError>,
    /// What a unit toggle re-resolves
    pub last_location: Option<LocationQuery>,
    /// Generation that produced the current phase
    pub generation: u64,
}

impl DashboardState {
    /// Message for the error banner
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ResolutionError::user_message)
    }

    /// Whether a loading indicator should be shown
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == ResolutionPhase::Resolving
    }
}

/// Result of a dashboard action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The action's result is now the displayed state
    Applied,
    /// A newer action started first; this result was discarded
    Superseded,
}

#[derive(Debug, Clone)]
enum Request {
    Name(String),
    Coordinate(Coordinate),
    Place(ResolvedPlace),
    Device(FallbackPolicy),
}

#[derive(Debug)]
struct Inner {
    resolver: LocationResolutionService,
    generations: GenerationTracker,
    state: Mutex<DashboardState>,
}

/// Explicit application state driven by user actions
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    inner: Arc<Inner>,
}

impl Dashboard {
    /// Create an idle dashboard
    #[must_use]
    pub fn new(resolver: LocationResolutionService, unit: UnitSystem) -> Self {
        Self {
            inner: Arc::new(Inner {
                resolver,
                generations: GenerationTracker::new(),
                state: Mutex::new(DashboardState {
                    unit,
                    ..DashboardState::default()
                }),
            }),
        }
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.inner.state.lock().clone()
    }

    /// Startup: show the device position, or the fallback city
    pub async fn start(&self) -> RequestOutcome {
        self.run(Request::Device(FallbackPolicy::FallbackCity))
            .await
    }

    /// Search for a place by name
    ///
    /// A blank name fails immediately and does not cancel work in flight.
    /// While a resolution is running only the error is set; its commit
    /// decides the phase.
    pub async fn search(&self, name: &str) -> RequestOutcome {
        let query = LocationQuery::by_name(name);
        if query.is_blank() {
            let mut state = self.inner.state.lock();
            if state.phase != ResolutionPhase::Resolving {
                state.phase = ResolutionPhase::Failed;
            }
            state.error = Some(ResolutionError::not_found(name.trim()));
            return RequestOutcome::Applied;
        }
        self.run(Request::Name(name.trim().to_string())).await
    }

    /// Show weather for a raw coordinate
    pub async fn show_coordinate(&self, coordinate: Coordinate) -> RequestOutcome {
        self.run(Request::Coordinate(coordinate)).await
    }

    /// Explicit "use my location"; never falls back to another city
    pub async fn use_my_location(&self) -> RequestOutcome {
        self.run(Request::Device(FallbackPolicy::ReportFailure))
            .await
    }

    /// Flip the unit system and re-resolve the last location
    ///
    /// Re-resolves the coordinate of the displayed snapshot when there is
    /// one, otherwise the last requested location. With nothing requested
    /// yet only the unit changes. If the re-resolution fails the unit falls
    /// back to that of the snapshot still displayed.
    pub async fn toggle_unit(&self) -> RequestOutcome {
        let request = {
            let mut state = self.inner.state.lock();
            state.unit = state.unit.toggled();
            info!(unit = %state.unit, "Unit system toggled");

            if let Some(ref snapshot) = state.snapshot {
                Some(Request::Place(ResolvedPlace {
                    display_name: snapshot.display_name(),
                    coordinate: snapshot.location(),
                }))
            } else {
                state.last_location.as_ref().map(|location| match location {
                    LocationQuery::ByName(name) => Request::Name(name.clone()),
                    LocationQuery::ByCoordinate(coordinate) => Request::Coordinate(*coordinate),
                })
            }
        };

        match request {
            Some(request) => self.run(request).await,
            None => RequestOutcome::Applied,
        }
    }

    #[instrument(skip(self))]
    async fn run(&self, request: Request) -> RequestOutcome {
        // Beginning the generation under the state lock keeps `commit` from
        // interleaving with a newer request.
        let (generation, unit) = {
            let mut state = self.inner.state.lock();
            let generation = self.inner.generations.begin();
            state.phase = ResolutionPhase::Resolving;
            state.generation = generation.value();
            (generation, state.unit)
        };
        debug!(generation = %generation, unit = %unit, "Resolution started");

        let resolution = self.resolve(&request, unit);
        let result = tokio::select! {
            () = self.inner.generations.superseded(generation) => {
                debug!(generation = %generation, "Resolution superseded, cancelling");
                return RequestOutcome::Superseded;
            }
            result = resolution => result,
        };

        self.commit(generation, &request, result)
    }

    async fn resolve(
        &self,
        request: &Request,
        unit: UnitSystem,
    ) -> Result<WeatherSnapshot, ResolutionError> {
        let resolver = &self.inner.resolver;
        match request {
            Request::Name(name) => resolver.resolve_by_name(name, unit).await,
            Request::Coordinate(coordinate) => {
                resolver.resolve_by_coordinate(*coordinate, unit).await
            },
            Request::Place(place) => resolver.resolve_place(place, unit).await,
            Request::Device(policy) => resolver.resolve_from_device(unit, *policy).await,
        }
    }

    fn commit(
        &self,
        generation: Generation,
        request: &Request,
        result: Result<WeatherSnapshot, ResolutionError>,
    ) -> RequestOutcome {
        let mut state = self.inner.state.lock();
        if !self.inner.generations.is_current(generation) {
            debug!(generation = %generation, "Discarding stale result");
            return RequestOutcome::Superseded;
        }

        match result {
            Ok(snapshot) => {
                state.last_location = Some(LocationQuery::ByCoordinate(snapshot.location()));
                state.snapshot = Some(snapshot);
                state.error = None;
                state.phase = ResolutionPhase::Success;
            },
            Err(err) => {
                warn!(generation = %generation, error = %err, "Resolution failed");
                if state.snapshot.is_none() {
                    match request {
                        Request::Name(name) => {
                            state.last_location = Some(LocationQuery::ByName(name.clone()));
                        },
                        Request::Coordinate(coordinate) => {
                            state.last_location = Some(LocationQuery::ByCoordinate(*coordinate));
                        },
                        Request::Place(_) | Request::Device(_) => {},
                    }
                }
                // The selected unit always labels the snapshot on screen.
                if let Some(ref snapshot) = state.snapshot {
                    state.unit = snapshot.unit();
                }
                state.error = Some(err);
                state.phase = ResolutionPhase::Failed;
            },
        }
        RequestOutcome::Applied
    }
}
