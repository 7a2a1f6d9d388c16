use crate::client::{unexpected_status, with_namespace, Client};
use crate::utils::{function_path, FUNCTION_PATH, UNAUTHORIZED_MSG};
use reqwest::{Method, StatusCode};
use utility::faas::types::model::FunctionStatus;
use utility::{Error, Result};

///get an OpenFaaS function information
impl<'s> Client<'s> {
    pub async fn get_function_info(
        &self,
        function_name: &str,
        namespace: &str,
    ) -> Result<FunctionStatus> {
        let read_err = |e: &dyn std::fmt::Debug| {
            Error::Custom(format!(
                "can't read function info from OpenFaaS on URL {}\nand debug reason {:?}",
                self.gateway.as_str(),
                e
            ))
        };

        let path = with_namespace(function_path(FUNCTION_PATH, function_name).as_str(), namespace)?;

        let req = self
            .new_request(Method::GET, path.as_str(), "".into())?
            .build()
            .map_err(|e| read_err(&e))?;

        let res = self.do_request(req).await.map_err(|_| {
            Error::Custom(format!(
                "can't connect to OpenFaaS on URL: {}",
                self.gateway.as_str()
            ))
        })?;

        match res.status() {
            StatusCode::OK => {
                let body = res.text().await.map_err(|e| read_err(&e))?;
                let status: FunctionStatus =
                    serde_json::from_str(body.as_str()).map_err(|e| read_err(&e))?;
                Ok(status)
            }
            StatusCode::UNAUTHORIZED => Err(Error::Custom(UNAUTHORIZED_MSG.to_string())),
            StatusCode::NOT_FOUND => {
                Err(Error::Custom(format!("No such function: {}", function_name)))
            }
            _ => Err(unexpected_status(res).await),
        }
    }
}
