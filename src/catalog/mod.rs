pub mod lookup;
pub mod source;
pub mod sources;
pub mod types;

pub use lookup::{CatalogLookup, EntityLookup, LookupError, LookupOutcome};
pub use source::{CatalogError, ProjectSource};
pub use sources::{FileProjectSource, HttpProjectSource};
pub use types::{Project, Venue};
