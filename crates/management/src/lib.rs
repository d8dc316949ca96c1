//! Campaign management: campaigns, ad sets, ads, audiences, content
//! library, brands, and platform connections, backed by an in-memory
//! store seeded with demo data.

pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use router::management_router;
pub use store::ManagementStore;
