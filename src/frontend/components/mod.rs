mod card_item;
mod error_banner;
mod list_column;

pub use card_item::CardItem;
pub use error_banner::ErrorBanner;
pub use list_column::ListColumn;
