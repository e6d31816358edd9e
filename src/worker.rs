use crate::models::{QuestionRequest, QuestionResponse};
use crate::selector::QuestionSelector;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Runs one selector call in the background and posts the result back to
/// the event loop. The call is never cancelled; the session decides whether
/// the reply is still wanted.
pub fn spawn_question_request(
    selector: Arc<dyn QuestionSelector>,
    request: QuestionRequest,
    tx: UnboundedSender<QuestionResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!(seq = request.seq, category = %request.category, "question request started");
        let text = selector.select(request.category).await;

        if tx
            .send(QuestionResponse {
                seq: request.seq,
                text,
            })
            .is_err()
        {
            tracing::debug!(seq = request.seq, "event loop gone, discarding question");
        }
    })
}
