#![forbid(unsafe_code)]

pub mod activity_service;
pub mod app_services;
pub mod bookmark_service;
pub mod catalog_client;
pub mod error;
pub mod progress_service;
pub mod stats_service;
pub mod transfer_service;

pub use tutor_core::Clock;

pub use activity_service::ActivityService;
pub use app_services::AppServices;
pub use bookmark_service::BookmarkService;
pub use catalog_client::CatalogClient;
pub use error::CatalogError;
pub use progress_service::ProgressService;
pub use stats_service::StatsService;
pub use transfer_service::TransferService;
