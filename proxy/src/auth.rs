use crate::client::ClientAuth;
use reqwest::RequestBuilder;
use utility::{Error, Result};

///basic authentication type
#[derive(Clone, Default)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: &str, password: &str) -> BasicAuth {
        BasicAuth {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl ClientAuth for BasicAuth {
    fn set(&self, req: &mut RequestBuilder) -> Result<()> {
        let req2 = req
            .try_clone()
            .ok_or(Error::Custom(format!("can't clone request :{:?}", req)))?;
        *req = req2.basic_auth(self.username.as_str(), Some(self.password.as_str()));
        Ok(())
    }
}
