use async_trait::async_trait;
use platter_core::actions::{ActionRequest, ActionSink, IdentityState, RedirectTarget, Router};
use platter_core::collection::{CollectionBucket, CollectionLookup, LookupFailure};
use std::sync::Mutex;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Identity that can change between render and click
#[derive(Default)]
pub struct MockIdentity {
    pub viewer: Mutex<Option<String>>,
}

#[allow(dead_code)]
impl MockIdentity {
    pub fn signed_in(user: &str) -> Self {
        Self {
            viewer: Mutex::new(Some(user.to_string())),
        }
    }

    pub fn sign_out(&self) {
        *self.viewer.lock().unwrap() = None;
    }
}

impl IdentityState for MockIdentity {
    fn viewer_identity(&self) -> Option<String> {
        self.viewer.lock().unwrap().clone()
    }
}

/// Lookup returning canned buckets, or failing when `buckets` is None
#[derive(Default)]
pub struct MockLookup {
    pub buckets: Option<Vec<CollectionBucket>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl CollectionLookup for MockLookup {
    async fn lookup(
        &self,
        viewer_identity: &str,
        released_id: &str,
    ) -> Result<Vec<CollectionBucket>, LookupFailure> {
        self.calls
            .lock()
            .unwrap()
            .push((viewer_identity.to_string(), released_id.to_string()));
        self.buckets
            .clone()
            .ok_or_else(|| LookupFailure::Unavailable("timed out".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub submitted: Mutex<Vec<ActionRequest>>,
    pub failures: Mutex<Vec<String>>,
}

impl ActionSink for RecordingSink {
    fn submit(&self, request: ActionRequest) {
        self.submitted.lock().unwrap().push(request);
    }

    fn report_failure(&self, released_id: &str, failure: &LookupFailure) {
        self.failures
            .lock()
            .unwrap()
            .push(format!("{released_id}: {failure}"));
    }
}

#[derive(Default)]
pub struct RecordingRouter {
    pub redirects: Mutex<Vec<RedirectTarget>>,
}

impl Router for RecordingRouter {
    fn redirect(&self, target: RedirectTarget) {
        self.redirects.lock().unwrap().push(target);
    }
}
