//! Share the invitation link.
//!
//! Two mutually exclusive paths, picked by capability detection on every
//! call: the native share sheet when the platform has one, otherwise a
//! clipboard copy of the link. Failures on either path are logged and
//! swallowed; the UI never sees them.

use std::future::Future;

use tracing::{info, warn};

use crate::error::ShareError;

/// What gets shared: the invitation title, blurb and link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareTarget {
    pub title: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

/// Platform sharing capabilities.
///
/// The browser implementation probes `navigator.share` and
/// `navigator.clipboard`; detection must not be cached.
pub trait SharePlatform {
    fn can_share(&self) -> bool;

    /// Open the native share sheet. May stay pending until the user
    /// dismisses it.
    fn share(&self, target: &ShareTarget) -> impl Future<Output = Result<(), ShareError>>;

    fn can_write_clipboard(&self) -> bool;

    fn write_clipboard(&self, text: &str) -> impl Future<Output = Result<(), ShareError>>;
}

/// Which path ran and how it ended. Diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed(ShareError),
    /// Neither share sheet nor clipboard exists.
    Unavailable,
}

/// Share `target` through `platform`. Never fails.
///
/// A rejected share sheet does not fall back to the clipboard: the user
/// already saw a share UI and dismissed it.
pub async fn share<P: SharePlatform>(platform: &P, target: &ShareTarget) -> ShareOutcome {
    if platform.can_share() {
        return match platform.share(target).await {
            Ok(()) => {
                info!(url = target.url, "shared invitation");
                ShareOutcome::Shared
            }
            Err(err) => {
                warn!(%err, "error sharing");
                ShareOutcome::Failed(err)
            }
        };
    }

    if !platform.can_write_clipboard() {
        warn!("no share sheet or clipboard available");
        return ShareOutcome::Unavailable;
    }

    match platform.write_clipboard(target.url).await {
        Ok(()) => {
            info!(url = target.url, "copied invitation link");
            ShareOutcome::Copied
        }
        Err(err) => {
            warn!(%err, "failed to copy link");
            ShareOutcome::Failed(err)
        }
    }
}
