//! Browser tests against a `dx serve` instance of the web package.

pub mod browser;
pub mod test_server;
