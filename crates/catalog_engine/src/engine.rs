use std::sync::{mpsc, Arc};
use std::thread;

use catalog_logging::{catalog_info, catalog_warn};

use crate::fetch::{ChannelProgressSink, FetchSettings, PageSource, ReqwestPageSource};
use crate::{EngineEvent, FetchError, Ticket};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    FetchPage { ticket: Ticket, page: u32 },
}

/// Runs page fetches on a worker thread and reports back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let source = ReqwestPageSource::new(settings)?;
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn PageSource>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
            catalog_info!("Engine command channel closed; worker exiting");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, ticket: Ticket, page: u32) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchPage { ticket, page })
            .is_err()
        {
            catalog_warn!("Engine worker gone; dropping fetch of page {}", page);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    source: &dyn PageSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { ticket, page } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = source.fetch_page(ticket, page, &sink).await;
            let _ = event_tx.send(EngineEvent::PageFetched {
                ticket,
                page,
                result,
            });
        }
    }
}
