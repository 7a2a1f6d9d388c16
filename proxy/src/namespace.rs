use crate::client::{unexpected_status, Client};
use crate::utils::{NAMESPACES_PATH, UNAUTHORIZED_MSG};
use reqwest::{Method, StatusCode};
use utility::{Error, Result};

impl<'s> Client<'s> {
    ///lists available function namespaces. providers without namespace
    ///support answer 404, which is reported as an empty list
    pub async fn list_namespaces(&self) -> Result<Vec<String>> {
        let read_err = |e: &dyn std::fmt::Debug| {
            Error::Custom(format!(
                "can't read namespaces from OpenFaaS on URL {}\nand debug reason {:?}",
                self.gateway.as_str(),
                e
            ))
        };

        let req = self
            .new_request(Method::GET, NAMESPACES_PATH, "".into())?
            .build()
            .map_err(|e| read_err(&e))?;

        let res = self.do_request(req).await.map_err(|e| read_err(&e))?;

        match res.status() {
            StatusCode::OK => {
                let body = res.text().await.map_err(|e| read_err(&e))?;
                if body.trim().is_empty() {
                    return Ok(vec![]);
                }
                let namespaces: Option<Vec<String>> =
                    serde_json::from_str(body.as_str()).map_err(|e| read_err(&e))?;
                Ok(namespaces.unwrap_or_default())
            }
            StatusCode::NOT_FOUND => Ok(vec![]),
            StatusCode::UNAUTHORIZED => Err(Error::Custom(UNAUTHORIZED_MSG.to_string())),
            _ => Err(unexpected_status(res).await),
        }
    }
}
