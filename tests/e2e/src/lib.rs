//! End-to-end harness: launches the `web` server against a stub command
//! service.

pub mod test_server;
