// One service per platform component; each wraps the repository trait it
// coordinates and carries the handler-facing business rules.
pub mod assessment;
pub mod catalog;
pub mod enrollment;
pub mod identity;
pub mod support;
