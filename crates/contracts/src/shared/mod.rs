pub mod paginator;

pub use paginator::Paginated;
