//! Per-image recognition cache
//!
//! A session owns one image and runs the external recognizer over it at most
//! once. Callers that arrive while a run is in flight share that run's
//! outcome instead of starting their own; a failed run leaves the cache
//! empty so a later call may retry.

use std::sync::Arc;

use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::recognize::{RecognitionError, TextRecognizer, TextRegion};
use crate::source::SourceImage;

type SharedRun = Shared<BoxFuture<'static, Result<Arc<[TextRegion]>, RecognitionError>>>;

/// Caches one recognition pass over one image.
pub struct RecognitionSession {
    image: SourceImage,
    recognizer: Arc<dyn TextRecognizer>,
    /// The run currently in flight, shared by every concurrent caller.
    inflight: Mutex<Option<SharedRun>>,
    /// Snapshot of a successful run. `None` means "not yet computed",
    /// distinct from a completed run that found no text.
    completed: RwLock<Option<Arc<[TextRegion]>>>,
}

impl RecognitionSession {
    pub fn new(image: SourceImage, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            image,
            recognizer,
            inflight: Mutex::new(None),
            completed: RwLock::new(None),
        }
    }

    pub fn image(&self) -> &SourceImage {
        &self.image
    }

    /// Snapshot of the completed region list, if recognition has succeeded.
    ///
    /// Never blocks; rendering uses this to work with whatever is cached so
    /// far.
    pub fn cached(&self) -> Option<Arc<[TextRegion]>> {
        self.completed.read().clone()
    }

    /// All recognized regions, running the recognizer on first use.
    ///
    /// Regions come back in recognizer-returned order; no re-sorting.
    pub async fn regions(&self) -> Result<Arc<[TextRegion]>, RecognitionError> {
        if let Some(done) = self.cached() {
            return Ok(done);
        }

        let run = {
            let mut slot = self.inflight.lock();
            match slot.as_ref() {
                Some(run) => run.clone(),
                None => {
                    let run = Self::start_run(self.image.clone(), Arc::clone(&self.recognizer));
                    *slot = Some(run.clone());
                    run
                }
            }
        };

        let outcome = run.clone().await;
        match &outcome {
            Ok(regions) => {
                debug!("recognition complete: {} text regions", regions.len());
                *self.completed.write() = Some(Arc::clone(regions));
            }
            Err(_) => {
                // Clear the failed run so a later call retries, unless a
                // newer run has already replaced it.
                let mut slot = self.inflight.lock();
                if slot.as_ref().is_some_and(|current| current.ptr_eq(&run)) {
                    *slot = None;
                }
            }
        }
        outcome
    }

    /// Regions with `confidence >= confidence_threshold`.
    ///
    /// See [`DEFAULT_CONFIDENCE_THRESHOLD`](crate::recognize::DEFAULT_CONFIDENCE_THRESHOLD)
    /// for the conventional cutoff.
    pub async fn observations(
        &self,
        confidence_threshold: f64,
    ) -> Result<Vec<TextRegion>, RecognitionError> {
        let regions = self.regions().await?;
        Ok(regions
            .iter()
            .filter(|region| region.confidence >= confidence_threshold)
            .cloned()
            .collect())
    }

    /// Joined text of the confident regions, in recognizer order.
    pub async fn text(
        &self,
        confidence_threshold: f64,
        separator: &str,
    ) -> Result<String, RecognitionError> {
        let regions = self.observations(confidence_threshold).await?;
        Ok(regions
            .iter()
            .map(|region| region.text.as_str())
            .collect::<Vec<_>>()
            .join(separator))
    }

    fn start_run(image: SourceImage, recognizer: Arc<dyn TextRecognizer>) -> SharedRun {
        let future: BoxFuture<'static, Result<Arc<[TextRegion]>, RecognitionError>> =
            async move {
                let observations = recognizer
                    .recognize(&image)
                    .await
                    .map_err(|err| RecognitionError::Recognizer(err.to_string()))?;

                let size = image.dimensions();
                let regions: Vec<TextRegion> = observations
                    .into_iter()
                    .filter_map(|observation| TextRegion::from_observation(observation, size))
                    .collect();

                Ok(Arc::from(regions))
            }
            .boxed();
        future.shared()
    }
}
