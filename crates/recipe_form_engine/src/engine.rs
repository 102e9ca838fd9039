use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use recipe_logging::{recipe_info, recipe_warn};

use crate::submit::{ReqwestSubmitter, SubmitSettings, Submitter};
use crate::{EngineEvent, SubmissionId, SubmitRequest};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        request: SubmitRequest,
    },
}

/// Runs submissions on a background tokio runtime and reports completions
/// through a channel polled by the UI loop.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn start(settings: SubmitSettings) -> io::Result<Self> {
        Self::with_submitter(Arc::new(ReqwestSubmitter::new(settings)))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("recipe-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let submitter = submitter.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(submitter.as_ref(), command, event_tx).await;
                    });
                }
                recipe_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, submission_id: SubmissionId, request: SubmitRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            request,
        } => {
            let result = submitter.submit(submission_id, &request).await;
            if let Err(err) = &result {
                recipe_warn!("Submission {} failed: {}", submission_id, err);
            }
            let _ = event_tx.send(EngineEvent::SubmissionCompleted {
                submission_id,
                result,
            });
        }
    }
}
