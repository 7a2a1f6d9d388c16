use crate::client::{unexpected_status, Client};
use crate::utils::{INFO_ENDPOINT, UNAUTHORIZED_MSG};
use reqwest::{Method, StatusCode};
use utility::faas::types::info_request::GatewayInfo;
use utility::{Error, Result};

impl<'s> Client<'s> {
    /// get_system_info reads the gateway and provider versions
    pub async fn get_system_info(&self) -> Result<GatewayInfo> {
        let open_err = |e: &dyn std::fmt::Debug| {
            Error::Custom(format!(
                "can't open OpenFaaS on URL {}\nand debug reason {:?}",
                self.gateway.as_str(),
                e
            ))
        };

        let req = self
            .new_request(Method::GET, INFO_ENDPOINT, "".into())?
            .build()
            .map_err(|e| open_err(&e))?;

        let res = self.do_request(req).await.map_err(|e| open_err(&e))?;

        match res.status() {
            StatusCode::OK | StatusCode::ACCEPTED => {
                let body = res.text().await.map_err(|e| open_err(&e))?;
                let info: GatewayInfo = serde_json::from_str(body.as_str()).map_err(|e| {
                    Error::Custom(format!(
                        "can't read system info from OpenFaaS on URL {}\nand debug reason {:?}",
                        self.gateway.as_str(),
                        e
                    ))
                })?;
                Ok(info)
            }
            StatusCode::UNAUTHORIZED => Err(Error::Custom(UNAUTHORIZED_MSG.to_string())),
            _ => Err(unexpected_status(res).await),
        }
    }
}
