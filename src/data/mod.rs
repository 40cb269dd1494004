pub(crate) mod loader;
pub(crate) mod types;

pub(crate) use types::{PortfolioItem, ProfileData, Quote, SecurityReport, Skill, TimelineEntry};
