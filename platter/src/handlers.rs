//! Terminal implementations of the action collaborators

use async_trait::async_trait;
use platter_core::actions::{ActionRequest, ActionSink, RedirectTarget, Router};
use platter_core::collection::{CollectionBucket, CollectionLookup, LookupFailure};
use tracing::error;

/// Prints the dialog the request would open
pub struct ConsoleSink;

impl ActionSink for ConsoleSink {
    fn submit(&self, request: ActionRequest) {
        println!("{} dialog for release {}", request.dialog(), request.released_id);
        if let Some(buckets) = &request.collection_context {
            if buckets.is_empty() {
                println!("  (no collections yet)");
            }
            for bucket in buckets {
                let mark = if bucket.contains_release { "x" } else { " " };
                println!("  [{}] {} ({})", mark, bucket.name, bucket.id);
            }
        }
    }

    fn report_failure(&self, released_id: &str, failure: &LookupFailure) {
        error!("Could not load collections for {}: {}", released_id, failure);
        eprintln!("Could not load your collections for release {released_id}: {failure}");
    }
}

/// Tells the user where to sign in instead of navigating
pub struct ConsoleRouter;

impl Router for ConsoleRouter {
    fn redirect(&self, target: RedirectTarget) {
        eprintln!(
            "Not signed in. Set PLATTER_USER_ID or user_id in config.yaml ({})",
            target.path()
        );
    }
}

/// Stand-in when no collection server is configured; every lookup fails.
pub struct UnconfiguredLookup;

#[async_trait]
impl CollectionLookup for UnconfiguredLookup {
    async fn lookup(
        &self,
        _viewer_identity: &str,
        _released_id: &str,
    ) -> Result<Vec<CollectionBucket>, LookupFailure> {
        Err(LookupFailure::Unavailable(
            "no collection server configured".to_string(),
        ))
    }
}
