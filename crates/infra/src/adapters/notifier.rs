//! Notifier that writes notices to the log
//!
//! Headless builds have no toast surface; notices end up as structured log
//! lines instead.

use timelog_core::Notifier;
use timelog_domain::{Notice, NoticeKind};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => warn!(position = %notice.position, "{}", notice.message),
            NoticeKind::Info | NoticeKind::Success => {
                info!(kind = %notice.kind, position = %notice.position, "{}", notice.message);
            }
        }
    }
}
