// Rendering: pure projections of a resolved `Resume` into a typed view tree.
// Nothing in here awaits or touches shared state; the route loader has already
// resolved the data before any of these functions run.

pub mod career;
pub mod educations;
pub mod information;
pub mod page;
pub mod pages;
pub mod projects;
pub mod section;
pub mod shell;
pub mod skills;
pub mod view;

#[cfg(test)]
pub mod fixtures;
