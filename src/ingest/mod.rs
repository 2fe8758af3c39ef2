/// Observation sources and the fallback-aware data provider.
///
/// Submodules:
/// - `jma` — live JMA bosai flood / sediment / weather-warning feeds.
/// - `synthetic` — seeded random stand-in data built from `stations`.
///
/// `DataProvider` wraps one primary source with a synthetic fallback so
/// every collection in a snapshot is always populated.

pub mod jma;
pub mod synthetic;

use crate::config::{ProviderConfig, SourceKind};
use crate::error::ProviderError;
use crate::logging::{self, DataSource};
use crate::model::{
    LandslideObservation, RiverObservation, RoadObservation, Snapshot, WeatherWarning,
};

use self::jma::JmaSource;
use self::synthetic::SyntheticSource;

/// A producer of normalized observation records.
///
/// Implementations must build statuses and warning levels through
/// `classify` so that every record honours its own thresholds.
pub trait ObservationSource {
    fn kind(&self) -> DataSource;

    fn rivers(&mut self) -> Result<Vec<RiverObservation>, ProviderError>;

    fn roads(&mut self) -> Result<Vec<RoadObservation>, ProviderError>;

    fn landslides(&mut self) -> Result<Vec<LandslideObservation>, ProviderError>;

    fn weather_warnings(&mut self) -> Result<Vec<WeatherWarning>, ProviderError> {
        Ok(Vec::new())
    }
}

pub struct DataProvider {
    primary: Box<dyn ObservationSource>,
    fallback: SyntheticSource,
}

impl DataProvider {
    pub fn new(primary: Box<dyn ObservationSource>, fallback: SyntheticSource) -> Self {
        Self { primary, fallback }
    }

    /// A provider that only ever produces synthetic data.
    pub fn synthetic(seed: Option<u64>) -> Self {
        Self::new(
            Box::new(SyntheticSource::new(seed)),
            SyntheticSource::new(seed.map(|s| s.wrapping_add(1))),
        )
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        match config.source {
            SourceKind::Synthetic => Ok(Self::synthetic(config.seed)),
            SourceKind::Live => {
                let live = JmaSource::new(config.timeout(), config.connect_timeout())?;
                Ok(Self::new(Box::new(live), SyntheticSource::new(config.seed)))
            }
        }
    }

    pub fn rivers(&mut self) -> Vec<RiverObservation> {
        let fetched = self.primary.rivers();
        with_fallback(self.primary.kind(), "rivers", fetched, || self.fallback.generate_rivers())
    }

    pub fn roads(&mut self) -> Vec<RoadObservation> {
        let fetched = self.primary.roads();
        with_fallback(self.primary.kind(), "roads", fetched, || self.fallback.generate_roads())
    }

    pub fn landslides(&mut self) -> Vec<LandslideObservation> {
        let fetched = self.primary.landslides();
        with_fallback(self.primary.kind(), "landslides", fetched, || {
            self.fallback.generate_landslides()
        })
    }

    /// Weather warnings have no synthetic counterpart; failures yield an
    /// empty list.
    pub fn weather_warnings(&mut self) -> Vec<WeatherWarning> {
        match self.primary.weather_warnings() {
            Ok(warnings) => warnings,
            Err(e) => {
                logging::log_feed_failure(self.primary.kind(), "warnings", &e);
                Vec::new()
            }
        }
    }

    /// Fetches all three collections for one refresh cycle.
    pub fn snapshot(&mut self) -> Snapshot {
        let snapshot = Snapshot {
            rivers: self.rivers(),
            roads: self.roads(),
            landslides: self.landslides(),
        };
        logging::log_snapshot_summary(
            snapshot.rivers.len(),
            snapshot.roads.len(),
            snapshot.landslides.len(),
        );
        snapshot
    }
}

/// Uses `fetched` when it is non-empty, otherwise logs and falls back.
fn with_fallback<T>(
    source: DataSource,
    collection: &str,
    fetched: Result<Vec<T>, ProviderError>,
    fallback: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match fetched {
        Ok(items) if !items.is_empty() => {
            logging::info(
                source,
                Some(collection),
                &format!("Fetched {} {} entries", items.len(), collection),
            );
            return items;
        }
        Ok(_) => logging::warn(source, Some(collection), "feed returned no entries, using mock data"),
        Err(e) => logging::log_feed_failure(source, collection, &e),
    }
    fallback()
}
