pub mod book;
pub mod category;
pub mod user;

pub use book::PostgresBookRepository;
pub use category::PostgresCategoryRepository;
pub use user::PostgresUserRepository;
