mod checkin;
mod explorer;
mod export;
mod intros;
mod refine;

pub use checkin::{draw_checkin_view, CheckInViewState};
pub use explorer::{draw_explorer_view, ExplorerViewState};
pub use export::{draw_export_view, ExportViewState};
pub use intros::{draw_intros_view, IntrosViewState};
pub use refine::{draw_refine_view, RefineViewState};
