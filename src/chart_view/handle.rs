use super::{
    ChartView, EventSurface, FetchOutcome, FetchTicket, PointerOutcome, PointerTracker,
    TooltipContent,
};
use crate::config::ChartConfig;
use crate::data_types::{PriceSource, RawSample, ViewConfig};
use crate::error::FetchError;
use crate::geometry::Point;
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

/// Shared mount point for a [`ChartView`]. Clones refer to the same chart.
#[derive(Clone)]
pub struct ChartHandle {
    inner: Arc<Mutex<ChartView>>,
}

impl ChartHandle {
    pub fn new(config: ChartConfig, view: ViewConfig) -> Self {
        Self::from_view(ChartView::new(config, view))
    }

    pub fn from_view(chart: ChartView) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chart)),
        }
    }

    /// Runs `f` with the chart locked.
    pub fn read<R>(&self, f: impl FnOnce(&ChartView) -> R) -> R {
        f(&*self.inner.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut ChartView) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    pub fn set_view_config(&self, view: ViewConfig) -> Option<FetchTicket> {
        self.inner.lock().set_view_config(view)
    }

    pub fn deliver(
        &self,
        ticket: FetchTicket,
        result: Result<Vec<RawSample>, FetchError>,
    ) -> FetchOutcome {
        self.inner.lock().complete_fetch(ticket, result)
    }

    /// Switches to `view` and fetches it in the background. `Ok(None)` when
    /// the view was already current.
    pub fn show(
        &self,
        view: ViewConfig,
        source: Arc<dyn PriceSource>,
    ) -> eyre::Result<Option<JoinHandle<FetchOutcome>>> {
        match self.set_view_config(view) {
            Some(ticket) => self.spawn_fetch(ticket, source).map(Some),
            None => Ok(None),
        }
    }

    /// Fetches the current view again in the background, superseding any
    /// fetch still in flight.
    pub fn fetch_with(&self, source: Arc<dyn PriceSource>) -> eyre::Result<JoinHandle<FetchOutcome>> {
        let ticket = self.inner.lock().request_fetch();
        self.spawn_fetch(ticket, source)
    }

    /// Runs `source` for `ticket` on a worker thread and delivers the result
    /// through the ticket guard. The lock is not held while fetching. If no
    /// worker can be started the ticket is settled with
    /// [`FetchError::WorkerLost`] so the chart does not stay loading.
    pub fn spawn_fetch(
        &self,
        ticket: FetchTicket,
        source: Arc<dyn PriceSource>,
    ) -> eyre::Result<JoinHandle<FetchOutcome>> {
        let name = format!("price-fetch-{}", ticket.id());
        self.spawn_on(thread::Builder::new().name(name), ticket, source)
    }

    fn spawn_on(
        &self,
        builder: thread::Builder,
        ticket: FetchTicket,
        source: Arc<dyn PriceSource>,
    ) -> eyre::Result<JoinHandle<FetchOutcome>> {
        let handle = self.clone();
        let job = ticket.clone();
        let spawned = builder.spawn(move || {
            let result = fetch_guarded(source.as_ref(), &job);
            handle.deliver(job, result)
        });
        match spawned {
            Ok(worker) => Ok(worker),
            Err(err) => {
                error!(ticket = ticket.id(), error = %err, "could not start fetch worker");
                self.deliver(ticket, Err(FetchError::WorkerLost));
                Err(eyre::Report::new(err).wrap_err("failed to spawn fetch worker"))
            }
        }
    }

    pub fn redraw(&self) {
        self.inner.lock().redraw();
    }

    pub fn event_surface(&self) -> Option<EventSurface> {
        self.inner.lock().event_surface()
    }

    pub fn pointer_enter(&self, surface: EventSurface, position: Point) -> PointerOutcome {
        self.inner.lock().pointer_enter(surface, position)
    }

    pub fn pointer_move(&self, surface: EventSurface, position: Point) -> PointerOutcome {
        self.inner.lock().pointer_move(surface, position)
    }

    pub fn pointer_leave(&self, surface: EventSurface) -> PointerOutcome {
        self.inner.lock().pointer_leave(surface)
    }

    pub fn track_pointer(&self, tracker: &mut PointerTracker, position: Option<Point>) -> PointerOutcome {
        tracker.track(&mut self.inner.lock(), position)
    }

    pub fn tooltip(&self) -> Option<TooltipContent> {
        self.inner.lock().tooltip()
    }

    pub fn title(&self) -> String {
        self.inner.lock().view().title()
    }

    pub fn to_svg(&self) -> String {
        self.inner.lock().to_svg()
    }
}

/// Runs `source` for `ticket`, reporting a panicking source as
/// [`FetchError::WorkerLost`].
pub fn fetch_guarded(
    source: &dyn PriceSource,
    ticket: &FetchTicket,
) -> Result<Vec<RawSample>, FetchError> {
    debug!(ticket = ticket.id(), view = %ticket.view().title(), "fetching");
    panic::catch_unwind(AssertUnwindSafe(|| source.fetch(ticket.view()))).unwrap_or_else(|_| {
        error!(ticket = ticket.id(), "price source panicked");
        Err(FetchError::WorkerLost)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{StaticSource, TimeWindow};
    use crate::scene::Role;

    #[test]
    fn test_failed_spawn_settles_the_ticket() {
        let chart = ChartHandle::new(ChartConfig::default(), ViewConfig::new("bitcoin", TimeWindow::Year));
        let ticket = chart
            .set_view_config(ViewConfig::new("ethereum", TimeWindow::Day))
            .unwrap();

        // No address space can hold this stack, so the spawn itself fails.
        let builder = thread::Builder::new().stack_size(1 << (usize::BITS - 2));
        let err = chart
            .spawn_on(builder, ticket.clone(), Arc::new(StaticSource::new()))
            .unwrap_err();
        assert!(err.to_string().contains("failed to spawn fetch worker"));

        chart.read(|view| {
            assert!(view.pending_fetch().is_none());
            assert!(matches!(
                view.last_error(),
                Some(crate::error::ChartError::Fetch(FetchError::WorkerLost))
            ));
            assert_eq!(view.scene().unwrap().text(Role::Status), Some(crate::chart_view::STATUS_FETCH_FAILED));
        });
        assert_eq!(chart.deliver(ticket, Ok(Vec::new())), FetchOutcome::Stale);
    }
}
