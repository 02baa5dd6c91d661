//! Views of the Scan-Lite app

mod app;
mod not_found;
mod product_details;
mod scanner;

pub use app::App;
pub use not_found::NotFound;
pub use product_details::ProductDetailsView;
pub use scanner::Scanner;
