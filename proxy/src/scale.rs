use crate::client::{unexpected_status, with_namespace, Client};
use crate::utils::{function_path, SCALE_PATH, UNAUTHORIZED_MSG};
use reqwest::{Method, StatusCode};
use utility::faas_provider::types::ScaleServiceRequest;
use utility::{Error, Result};

impl<'s> Client<'s> {
    ///ScaleFunction asks the gateway to scale a function to `replicas`.
    ///it does not wait for the provider to converge
    pub async fn scale_function(
        &self,
        function_name: &str,
        namespace: &str,
        replicas: u64,
    ) -> Result<()> {
        let open_err = |e: &dyn std::fmt::Debug| {
            Error::Custom(format!(
                "can't open OpenFaaS on URL {}\nand debug reason {:?}",
                self.gateway.as_str(),
                e
            ))
        };

        let scale_req = ScaleServiceRequest {
            service_name: function_name,
            replicas,
        };
        let body = serde_json::to_string(&scale_req)?;

        let path = with_namespace(function_path(SCALE_PATH, function_name).as_str(), namespace)?;

        let req = self
            .new_request(Method::POST, path.as_str(), body)?
            .build()
            .map_err(|e| open_err(&e))?;

        let res = self.do_request(req).await.map_err(|e| open_err(&e))?;

        match res.status() {
            StatusCode::OK | StatusCode::ACCEPTED | StatusCode::CREATED => Ok(()),
            StatusCode::UNAUTHORIZED => Err(Error::Custom(UNAUTHORIZED_MSG.to_string())),
            StatusCode::NOT_FOUND => {
                Err(Error::Custom(format!("No such function: {}", function_name)))
            }
            _ => Err(unexpected_status(res).await),
        }
    }
}
