pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::book::service::BookService;
pub use domain::category::service::CategoryService;
pub use domain::user::service::UserService;
pub use inbound::http::router::create_router;
pub use inbound::http::router::AppState;
