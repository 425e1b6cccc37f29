// One module per platform component; the router wires each endpoint to
// exactly one handler here.
pub mod assessment;
pub mod catalog;
pub mod enrollment;
pub mod identity;
pub mod support;
