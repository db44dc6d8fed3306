//! nomnom のドメイン型（型と不変条件）

pub mod bookmark;
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod restaurant;
pub mod review;
pub mod search;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use bookmark::BookmarkSet;
pub use catalog::Catalog;
pub use command::NomCommand;
pub use config::AppConfig;
pub use error::{CatalogError, ConfigError, NotFound, ValidationError};
pub use restaurant::{MenuItem, PriceTier, Restaurant, RestaurantId};
pub use review::{Review, ReviewId, Stars};
pub use session::Session;
pub use view::{Tab, ViewState};
