//! HTTP handlers. Thin layer: decode the request, call the database service,
//! encode the response.

pub mod fees;
pub mod installments;
pub mod reports;
