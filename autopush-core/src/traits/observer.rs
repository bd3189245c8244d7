use crate::models::RequestObservation;

/// Sink for the serving layer's per-request and per-connection events.
pub trait IRequestObserver: Send + Sync {
    /// Record one observed request.
    fn record_request_path(&self, session_id: &str, path: &str, is_asset: bool);

    /// Forget everything tied to a closed connection.
    fn on_session_closed(&self, session_id: &str);

    /// Record an observation value.
    fn observe(&self, observation: &RequestObservation) {
        self.record_request_path(
            &observation.session_id,
            &observation.path,
            observation.is_asset,
        );
    }
}
