//! Domain operations over the repositories.

mod facade;
pub use facade::HbnbFacade;
