mod filter;
mod item;
mod load;

pub use filter::{filter, FilterSpec};
pub use item::{ActivityType, Cadence, CatalogItem, Contributor, EngagementKind};
pub use load::Catalog;
