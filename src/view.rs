use crate::{Error, Filter, Gateway, Marker, Station};
use std::future::Future;
use tokio::task::JoinHandle;
use url::Url;

/// One mounted station map: a single load cycle plus the selected filter.
///
/// Mounting spawns the load on the current tokio runtime, so it must be
/// called from within one. Dropping the view aborts a load that is still in
/// flight and its result is never observed.
pub struct StationView {
    stations: Option<Vec<Station>>,
    filter: Filter,
    pending: Option<JoinHandle<Vec<Station>>>,
}

impl StationView {
    pub fn mount(gateway: Gateway) -> StationView {
        StationView::mount_with(async move { gateway.load_stations().await })
    }

    pub fn mount_with<F>(load: F) -> StationView
    where
        F: Future<Output = Vec<Station>> + Send + 'static,
    {
        StationView {
            stations: None,
            filter: Filter::default(),
            pending: Some(tokio::spawn(load)),
        }
    }

    /// True until the load has finished, even if `settle` has not been awaited yet.
    pub fn is_loading(&self) -> bool {
        match &self.pending {
            Some(handle) => !handle.is_finished(),
            None => self.stations.is_none(),
        }
    }

    /// Waits for the load to finish. Afterwards the view is never loading again.
    pub async fn settle(&mut self) {
        let handle = match self.pending.as_mut() {
            Some(handle) => handle,
            None => return,
        };

        let stations = match handle.await {
            Ok(stations) => stations,
            Err(err) => {
                tracing::error!("Station load did not complete: {}", err);
                vec![]
            }
        };
        self.pending = None;

        tracing::debug!(count = stations.len(), "stations loaded");
        self.stations = Some(stations);
    }

    pub fn stations(&self) -> &[Station] {
        self.stations.as_deref().unwrap_or(&[])
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Station> {
        self.filter.apply(self.stations())
    }

    pub fn markers(&self, base_url: &Url) -> Result<Vec<Marker>, Error> {
        self.visible()
            .into_iter()
            .map(|s| Marker::for_station(s, base_url))
            .collect()
    }
}

impl Drop for StationView {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
