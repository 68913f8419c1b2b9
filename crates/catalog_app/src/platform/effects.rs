use catalog_core::{Artwork, ArtworkId, Effect, FetchTicket, Msg, PageInfo};
use catalog_engine::{
    CatalogRecord, EngineError, EngineEvent, EngineHandle, FetchSettings, Pagination,
};
use catalog_logging::{catalog_info, catalog_warn};
use chrono::Local;

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { ticket, page } => {
                    catalog_info!("FetchPage ticket={} page={}", ticket.0, page);
                    self.engine.enqueue(ticket.0, page);
                }
            }
        }
    }

    pub fn drain_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress(progress) => Msg::FetchProgress {
            ticket: FetchTicket(progress.ticket),
            bytes: progress.bytes,
        },
        EngineEvent::PageFetched {
            ticket,
            page,
            result,
        } => match result {
            Ok(catalog_page) => Msg::PageLoaded {
                ticket: FetchTicket(ticket),
                records: catalog_page.records.into_iter().map(map_record).collect(),
                page: map_pagination(catalog_page.pagination),
                fetched_at: Some(Local::now().format("%H:%M:%S").to_string()),
            },
            Err(err) => {
                catalog_warn!("Page {} fetch failed: {}", page, err);
                Msg::PageFailed {
                    ticket: FetchTicket(ticket),
                    error: err.to_string(),
                }
            }
        },
    }
}

fn map_record(record: CatalogRecord) -> Artwork {
    Artwork {
        id: ArtworkId(record.id),
        title: record.title,
        place_of_origin: record.place_of_origin,
        artist_display: record.artist_display,
        inscriptions: record.inscriptions,
        date_start: record.date_start,
        date_end: record.date_end,
    }
}

fn map_pagination(pagination: Pagination) -> PageInfo {
    PageInfo {
        total: pagination.total,
        limit: pagination.limit,
        offset: pagination.offset,
        total_pages: pagination.total_pages,
        current_page: pagination.current_page,
    }
}
