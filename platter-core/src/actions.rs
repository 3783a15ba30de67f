//! Add/remove action wiring for result cards.
//!
//! The presenter decides whether a card shows its action icon. This module
//! handles the click: it re-reads the viewer identity, runs the collection
//! lookup for adds, and hands an `ActionRequest` to the dialog layer.
//! Identity, lookup, dialog and routing are injected collaborators.

use crate::collection::{CollectionBucket, CollectionLookup, LookupFailure};
use platter_common::{has_release_id, ActionClick, ActionKind, PageContext};
use std::sync::Arc;
use tracing::{info, warn};

/// What the dialog layer receives when a card action completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub released_id: String,
    /// Result of the collection lookup; only set for adds
    pub collection_context: Option<Vec<CollectionBucket>>,
}

impl ActionRequest {
    /// Dialog type the request opens ("add-item" / "delete-item")
    pub fn dialog(&self) -> &'static str {
        self.kind.dialog()
    }
}

/// Where an unauthenticated click is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    SignIn,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::SignIn => "/signin",
        }
    }
}

/// Current signed-in user, read synchronously.
pub trait IdentityState: Send + Sync {
    fn viewer_identity(&self) -> Option<String>;
}

/// Consumer of action requests (the add/delete dialogs).
pub trait ActionSink: Send + Sync {
    fn submit(&self, request: ActionRequest);

    /// The action for `released_id` could not be completed.
    fn report_failure(&self, released_id: &str, failure: &LookupFailure);
}

pub trait Router: Send + Sync {
    fn redirect(&self, target: RedirectTarget);
}

/// Identity that never changes during the process (CLI, tests)
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<String>);

impl IdentityState for StaticIdentity {
    fn viewer_identity(&self) -> Option<String> {
        self.0.clone()
    }
}

/// How an invocation ended
#[derive(Debug)]
pub enum ActionOutcome {
    /// The card has no release id; nothing looked up or submitted
    MissingReleaseId,
    /// No viewer: sent to sign-in, nothing submitted
    Redirected,
    Submitted(ActionRequest),
    /// Lookup failed: reported to the sink, nothing submitted
    Aborted(LookupFailure),
}

/// Runs card actions against the injected collaborators.
#[derive(Clone)]
pub struct ActionDispatcher {
    identity: Arc<dyn IdentityState>,
    lookup: Arc<dyn CollectionLookup>,
    sink: Arc<dyn ActionSink>,
    router: Arc<dyn Router>,
}

impl ActionDispatcher {
    pub fn new(
        identity: Arc<dyn IdentityState>,
        lookup: Arc<dyn CollectionLookup>,
        sink: Arc<dyn ActionSink>,
        router: Arc<dyn Router>,
    ) -> Self {
        Self {
            identity,
            lookup,
            sink,
            router,
        }
    }

    /// Handle a click reported by a rendered card.
    pub async fn on_click(&self, click: ActionClick) -> ActionOutcome {
        self.invoke(click.kind, &click.released_id).await
    }

    /// Handle a click on a card's action icon for the given page.
    pub async fn invoke_for_page(&self, page: PageContext, released_id: &str) -> ActionOutcome {
        self.invoke(page.action_kind(), released_id).await
    }

    /// Handle a click on a card's action icon.
    ///
    /// The viewer is read here, not taken from render time: the user may have
    /// signed out between render and click.
    pub async fn invoke(&self, kind: ActionKind, released_id: &str) -> ActionOutcome {
        if !has_release_id(released_id) {
            warn!("Ignoring {:?} action without a release id", kind);
            return ActionOutcome::MissingReleaseId;
        }

        let Some(viewer) = self.identity.viewer_identity() else {
            info!("No signed-in user, redirecting to {}", RedirectTarget::SignIn.path());
            self.router.redirect(RedirectTarget::SignIn);
            return ActionOutcome::Redirected;
        };

        let request = match kind {
            ActionKind::Add => match self.lookup.lookup(&viewer, released_id).await {
                Ok(buckets) => ActionRequest {
                    kind,
                    released_id: released_id.to_string(),
                    collection_context: Some(buckets),
                },
                Err(failure) => {
                    warn!("Collection lookup for {} failed: {}", released_id, failure);
                    self.sink.report_failure(released_id, &failure);
                    return ActionOutcome::Aborted(failure);
                }
            },
            ActionKind::Remove => ActionRequest {
                kind,
                released_id: released_id.to_string(),
                collection_context: None,
            },
        };

        info!("Opening {} dialog for {}", request.dialog(), released_id);
        self.sink.submit(request.clone());
        ActionOutcome::Submitted(request)
    }
}
