//! Action handlers: UpdateAction dispatch and reveal timer tracking

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::handler::UpdateAction;
use crate::labs::LabKind;
use crate::message::Message;

/// Convenience type alias for reveal timer tracking, one task per lab
pub type RevealTaskMap = Arc<std::sync::Mutex<HashMap<LabKind, JoinHandle<()>>>>;

/// Execute an action by spawning (or aborting) a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, reveal_tasks: &RevealTaskMap) {
    match action {
        UpdateAction::ScheduleReveal { lab, token, delay } => {
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if msg_tx.send(Message::RevealDue { lab, token }).await.is_err() {
                    debug!("Message channel closed before {} reveal {}", lab, token);
                }
            });

            let previous = lock_tasks(reveal_tasks).insert(lab, handle);
            if let Some(previous) = previous {
                trace!("Superseding earlier {} reveal timer", lab);
                previous.abort();
            }
        }

        UpdateAction::CancelReveal { lab } => {
            if let Some(handle) = lock_tasks(reveal_tasks).remove(&lab) {
                debug!("Aborting {} reveal timer", lab);
                handle.abort();
            }
        }
    }
}

/// Abort every pending reveal timer
pub fn abort_all(reveal_tasks: &RevealTaskMap) -> usize {
    let handles: Vec<_> = lock_tasks(reveal_tasks).drain().map(|(_, h)| h).collect();
    let pending = handles.iter().filter(|h| !h.is_finished()).count();
    for handle in handles {
        handle.abort();
    }
    pending
}

fn lock_tasks(
    reveal_tasks: &RevealTaskMap,
) -> std::sync::MutexGuard<'_, HashMap<LabKind, JoinHandle<()>>> {
    // A panicking holder cannot leave the map half-updated
    reveal_tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
