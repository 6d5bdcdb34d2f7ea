//! Catalog browsing state machine
//!
//! `FacetState` and `PaginationState` hold the user's selection,
//! `CatalogRequest` maps a selection to the query to issue, `ResultMerger`
//! orders commits so late responses cannot clobber newer ones, and
//! `CatalogOrchestrator` ties them together behind an async lock.

pub mod facets;
pub mod merge;
pub mod orchestrator;
pub mod pagination;
pub mod query;

pub use facets::FacetState;
pub use merge::{MergePolicy, QueryTag, ResultMerger};
pub use orchestrator::{CatalogOrchestrator, CatalogState};
pub use pagination::PaginationState;
pub use query::CatalogRequest;
