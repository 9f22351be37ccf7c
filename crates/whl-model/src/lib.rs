pub mod country;
pub mod error;
pub mod ids;
pub mod site;
pub mod snapshot;
pub mod visit;
pub mod wonder;

pub use country::{Alpha2, Country, CountryFile, Member, OrphanAttribution};
pub use error::{ModelError, Result};
pub use ids::{SiteId, WonderId};
pub use site::{CountryCodes, InscribedSite, TentativeSite};
pub use snapshot::SnapshotEntities;
pub use visit::{Visit, VisitKind, VisitLinks, VisitTarget};
pub use wonder::{Wonder, WonderGroup};
