// Adapters layer: concrete implementations for external systems (outbound http, the axum host).

pub mod http;
pub mod server;

pub use http::{select_collection, ReqwestFetcher};
pub use server::{build_router, serve};
