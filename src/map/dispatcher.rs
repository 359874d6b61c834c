use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    thread,
    time::Duration,
};

use log::{debug, error};

use super::{RouteProvider, RouteRequest, RouteResponse};
use crate::MuseumMapError;

type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Runs every route request on its own worker thread and hands the
/// responses back through a channel, in arrival order. Requests are never
/// cancelled or deduplicated.
pub struct RouteDispatcher {
    provider: Arc<dyn RouteProvider + Send + Sync>,
    response_tx: Sender<RouteResponse>,
    response_rx: Receiver<RouteResponse>,
    notifier: Option<Notifier>,
}

impl RouteDispatcher {
    pub fn new(provider: Arc<dyn RouteProvider + Send + Sync>) -> Self {
        let (response_tx, response_rx) = mpsc::channel::<RouteResponse>();
        Self {
            provider,
            response_tx,
            response_rx,
            notifier: None,
        }
    }

    /// Called from the worker after each response is sent, e.g. to wake the UI
    pub fn with_notifier(mut self, notifier: impl Fn() + Send + Sync + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    /// The handle can be ignored; the worker ends on its own once the
    /// response is sent or the receiving side is gone.
    pub fn dispatch(&self, request: RouteRequest) -> thread::JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let response_tx = self.response_tx.clone();
        let notifier = self.notifier.clone();

        debug!("Dispatching route request {}", request.id);
        thread::spawn(move || {
            if let Err(e) = run_request(provider.as_ref(), request, &response_tx) {
                error!("Could not deliver route response {}: {}", request.id, e);
                return;
            }
            if let Some(notify) = notifier {
                notify();
            }
        })
    }

    pub fn try_recv(&self) -> Option<RouteResponse> {
        self.response_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<RouteResponse> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

fn run_request(
    provider: &(dyn RouteProvider + Send + Sync),
    request: RouteRequest,
    response_tx: &Sender<RouteResponse>,
) -> Result<(), MuseumMapError> {
    let result = provider.calculate(&request);
    response_tx
        .send(RouteResponse {
            request_id: request.id,
            origin: request.origin,
            result,
        })
        .map_err(|_| MuseumMapError::RouteBroadcastError)
}
