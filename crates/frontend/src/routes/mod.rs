pub mod history;
pub mod location;
pub mod panel;
pub mod readiness;
pub mod router;
pub mod routes;
pub mod service;

#[cfg(test)]
mod test_support;
