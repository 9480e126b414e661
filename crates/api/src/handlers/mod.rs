pub mod costs;
pub mod milestones;
pub mod permissions;
pub mod pricing;
pub mod templates;
