use std::sync::Arc;

use storage::{Blobs, StateStore};

use crate::Clock;
use crate::activity_service::ActivityService;
use crate::bookmark_service::BookmarkService;
use crate::catalog_client::CatalogClient;
use crate::progress_service::ProgressService;
use crate::stats_service::StatsService;
use crate::transfer_service::TransferService;

/// Assembles the app-facing services around one store and one clock.
#[derive(Clone)]
pub struct AppServices {
    progress: ProgressService,
    activity: ActivityService,
    bookmarks: BookmarkService,
    transfer: TransferService,
    stats: StatsService,
    catalog: CatalogClient,
}

impl AppServices {
    /// Builds services backed by the given store.
    ///
    /// `catalog_base_url` points at the catalog API root, e.g. `"/api"`
    /// behind a local proxy or a full origin.
    #[must_use]
    pub fn new(
        store: Arc<dyn StateStore>,
        clock: Clock,
        catalog_base_url: impl Into<String>,
    ) -> Self {
        let blobs = Blobs::new(store);
        let activity = ActivityService::new(clock, blobs.clone());
        let progress = ProgressService::new(clock, blobs.clone(), activity.clone());
        let bookmarks = BookmarkService::new(clock, blobs.clone());
        let transfer = TransferService::new(clock, blobs.clone());
        let stats = StatsService::new(clock, blobs);
        let catalog = CatalogClient::new(catalog_base_url);

        Self {
            progress,
            activity,
            bookmarks,
            transfer,
            stats,
            catalog,
        }
    }

    #[must_use]
    pub fn progress(&self) -> ProgressService {
        self.progress.clone()
    }

    #[must_use]
    pub fn activity(&self) -> ActivityService {
        self.activity.clone()
    }

    #[must_use]
    pub fn bookmarks(&self) -> BookmarkService {
        self.bookmarks.clone()
    }

    #[must_use]
    pub fn transfer(&self) -> TransferService {
        self.transfer.clone()
    }

    #[must_use]
    pub fn stats(&self) -> StatsService {
        self.stats.clone()
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogClient {
        self.catalog.clone()
    }
}
