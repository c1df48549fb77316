//! Message processing through the TEA update loop

use tokio::sync::mpsc;

use crate::actions::{handle_action, RevealTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up
/// chained messages and dispatching any resulting actions
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    reveal_tasks: &RevealTaskMap,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), reveal_tasks);
        }

        msg = result.message;
    }
}
