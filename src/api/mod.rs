/*
 * Responsibility
 * - HTTP 入口 (routes() の re-export など)
 * - handlers / dto / extractors を束ねる
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
