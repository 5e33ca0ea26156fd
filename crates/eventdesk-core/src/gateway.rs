// ── Gateway wrapper ──
//
// Every network call the controller makes goes through `Gateway::call`:
// loading indicator up for the duration, failures logged and toasted, then
// re-raised so the caller skips its state update.

use std::future::Future;
use std::sync::Arc;

use eventdesk_api::EventsClient;
use tracing::error;

use crate::error::CoreError;
use crate::feedback::{Feedback, LoadingIndicator, Toast};
use crate::messages;

pub(crate) struct Gateway {
    client: EventsClient,
    loading: LoadingIndicator,
    feedback: Arc<dyn Feedback>,
}

impl Gateway {
    pub(crate) fn new(client: EventsClient, feedback: Arc<dyn Feedback>) -> Self {
        Self {
            client,
            loading: LoadingIndicator::new(Arc::clone(&feedback)),
            feedback,
        }
    }

    pub(crate) fn client(&self) -> &EventsClient {
        &self.client
    }

    /// Run one request. `what` names the operation in logs.
    pub(crate) async fn call<T, E, F>(&self, what: &str, fut: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<CoreError>,
    {
        let _loading = self.loading.begin();
        match fut.await {
            Ok(value) => Ok(value),
            Err(err) => {
                let err: CoreError = err.into();
                error!(operation = what, error = %err, "request failed");
                self.feedback.toast(&Toast::error(messages::error_toast(&err)));
                Err(err)
            }
        }
    }

    /// Surface a failure that never reached the network (validation,
    /// missing selection) the same way as a request failure.
    pub(crate) fn reject(&self, what: &str, err: CoreError) -> CoreError {
        error!(operation = what, error = %err, "rejected");
        self.feedback.toast(&Toast::error(messages::error_toast(&err)));
        err
    }

    pub(crate) fn notify(&self, message: &str) {
        self.feedback.toast(&Toast::success(message));
    }
}
