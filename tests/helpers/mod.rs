mod test_server;

pub use test_server::TestServer;

pub const TEST_BUCKET: &str = "slideshow-test";
pub const TEST_URL_EXPIRES_SECONDS: u64 = 300;
