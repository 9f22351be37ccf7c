pub mod builder;
pub mod items;
pub mod render;
pub mod stats;

pub use builder::{SitelistReport, WonderlistReport, build_sitelist, build_wonderlist};
pub use items::{LineItem, ReportKind, ReportTotals, SiteKind};
pub use render::{Profile, render};
pub use stats::{Percentage, SiteTally, VisitedAccumulator, WonderTally};
