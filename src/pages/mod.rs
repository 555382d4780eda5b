// Page-level components, one per routed view.

pub mod dashboard;
pub mod login;
pub mod products;
pub mod signup;
