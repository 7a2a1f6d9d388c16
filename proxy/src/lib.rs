use crate::client::ClientAuth;

pub mod auth;
pub mod client;
pub mod describe;
pub mod list;
pub mod namespace;
pub mod prometheus;
pub mod scale;
pub mod utils;
pub mod version;

#[derive(Clone)]
pub struct TestAuth;

impl ClientAuth for TestAuth {
    fn set(&self, _req: &mut reqwest::RequestBuilder) -> utility::Result<()> {
        Ok(())
    }
}
