use crate::client::{unexpected_status, with_namespace, Client};
use crate::utils::{SYSTEM_PATH, UNAUTHORIZED_MSG};
use reqwest::{Method, StatusCode};
use utility::faas::types::model::FunctionStatus;
use utility::{Error, Result};

impl<'s> Client<'s> {
    /// ListFunctions list deployed functions, scoped to `namespace` when it is not empty
    pub async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        let read_err = |e: &dyn std::fmt::Debug| {
            Error::Custom(format!(
                "can't read list from OpenFaaS on URL {}\nand debug reason {:?}",
                self.gateway.as_str(),
                e
            ))
        };

        let list_endpoint = with_namespace(SYSTEM_PATH, namespace)?;

        let req = self
            .new_request(Method::GET, list_endpoint.as_str(), "".into())?
            .build()
            .map_err(|e| read_err(&e))?;

        let res = self.do_request(req).await.map_err(|e| read_err(&e))?;

        match res.status() {
            StatusCode::OK => {
                let body = res.text().await.map_err(|e| read_err(&e))?;
                // a provider with no functions may answer `null`
                let status: Option<Vec<FunctionStatus>> =
                    serde_json::from_str(body.as_str()).map_err(|e| read_err(&e))?;
                Ok(status.unwrap_or_default())
            }
            StatusCode::UNAUTHORIZED => Err(Error::Custom(UNAUTHORIZED_MSG.to_string())),
            _ => Err(unexpected_status(res).await),
        }
    }
}
