use crate::utils::NAMESPACE_KEY;
use reqwest::Url;
use std::time::Duration;
use url::ParseError;
use utility::{Error, Result};

///an API client to perform all operations against the gateway
pub struct Client<'s> {
    pub(crate) http_client: reqwest::Client,
    ///ClientAuth a type implementing ClientAuth interface for client authentication
    pub client_auth: Box<&'s dyn ClientAuth>,
    ///Gatewayurl base url of OpenFaaS gateway
    pub gateway: Url,
}

///ClientAuth an interface for client authentication.
// to add authentication to the client implement this interface
pub trait ClientAuth: Send + Sync {
    fn set(&self, req: &mut reqwest::RequestBuilder) -> Result<()>;
}

impl<'s> Client<'s> {
    /// initializes a new API client without a request timeout
    pub fn new(auth: Box<&'s dyn ClientAuth>, gateway: &str) -> Result<Client<'s>> {
        Client::build(auth, gateway, reqwest::Client::builder())
    }

    /// initializes a new API client whose requests give up after `timeout`
    pub fn with_timeout(
        auth: Box<&'s dyn ClientAuth>,
        gateway: &str,
        timeout: Duration,
    ) -> Result<Client<'s>> {
        Client::build(auth, gateway, reqwest::Client::builder().timeout(timeout))
    }

    fn build(
        auth: Box<&'s dyn ClientAuth>,
        gateway: &str,
        builder: reqwest::ClientBuilder,
    ) -> Result<Client<'s>> {
        let url = gateway.trim_end_matches('/');
        let url = Url::parse(url).map_err(|e| Error::Custom(format!("{:?}", e)))?;

        Ok(Client {
            http_client: builder.build()?,
            client_auth: auth,
            gateway: url,
        })
    }

    ///create a new HTTP request with authentication
    pub fn new_request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: String,
    ) -> Result<reqwest::RequestBuilder> {
        let u = parse_relative(path)?;

        // copy the gateway url and append the supplied path and args so that
        // a base path on the gateway url is preserved
        let mut endpoint = self.gateway.clone();
        let joined = format!(
            "{}/{}",
            endpoint.path().trim_end_matches('/'),
            u.path().trim_start_matches('/')
        );
        endpoint.set_path(joined.as_str());
        endpoint.set_query(u.query());

        let mut req = self.http_client.request(method, endpoint);

        if !body.is_empty() {
            req = req.header("Content-Type", "application/json").body(body);
        }
        self.client_auth.set(&mut req)?;

        Ok(req)
    }

    ///perform an HTTP request
    pub(crate) async fn do_request(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        let resp = self.http_client.execute(req).await?;
        Ok(resp)
    }
}

/// parses an absolute url, or a path against a placeholder host
fn parse_relative(path: &str) -> Result<Url> {
    match Url::parse(path) {
        Ok(u) => Ok(u),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let url = format!("http://example.com/{}", path.trim_start_matches('/'));
            Ok(Url::parse(url.as_str())?)
        }
        Err(e) => Err(Error::Custom(format!("{:?}", e))),
    }
}

/// appends `?namespace=` to `path` when a namespace is given
pub(crate) fn with_namespace(path: &str, namespace: &str) -> Result<String> {
    if namespace.is_empty() {
        return Ok(path.to_string());
    }
    add_query_params(path, &[(NAMESPACE_KEY, namespace)])
}

pub(crate) fn add_query_params(url: &str, params: &[(&str, &str)]) -> Result<String> {
    let relative = matches!(Url::parse(url), Err(ParseError::RelativeUrlWithoutBase));
    let mut parsed_url = parse_relative(url)?;
    {
        let mut modifier = parsed_url.query_pairs_mut();
        for (key, val) in params {
            modifier.append_pair(key, val);
        }
    }

    let url = parsed_url.to_string();
    if relative {
        Ok(url.trim_start_matches("http://example.com").to_string())
    } else {
        Ok(url)
    }
}

/// error for a response status the caller has no arm for
pub(crate) async fn unexpected_status(res: reqwest::Response) -> Error {
    let status = res.status();
    match res.text().await {
        Ok(body) => Error::Custom(format!(
            "Server returned unexpected status code {} and body {}",
            status, body
        )),
        Err(e) => Error::Reqwest(e),
    }
}

#[test]
fn test_add_query_params() {
    struct TestCase {
        _name: &'static str,
        params: Vec<(&'static str, &'static str)>,
        url: &'static str,
        expected_url: &'static str,
    }

    let cases = vec![
        TestCase {
            _name: "url without hostname",
            params: vec![("namespace", "openfaas-fn")],
            url: "/system/functions",
            expected_url: "/system/functions?namespace=openfaas-fn",
        },
        TestCase {
            _name: "url hostname",
            params: vec![("namespace", "openfaas-fn")],
            url: "http://127.0.0.1/system/functions",
            expected_url: "http://127.0.0.1/system/functions?namespace=openfaas-fn",
        },
        TestCase {
            _name: "A url with simple hostname",
            params: vec![("namespace", "openfaas-fn")],
            url: "example",
            expected_url: "/example?namespace=openfaas-fn",
        },
    ];

    for test in cases {
        let res = add_query_params(test.url, &test.params);
        assert!(res.is_ok());
        let url = res.unwrap();
        assert_eq!(url, test.expected_url);
    }
}

#[test]
fn test_with_namespace() {
    assert_eq!(
        with_namespace("/system/functions", "").unwrap(),
        "/system/functions"
    );
    assert_eq!(
        with_namespace("/system/function/figlet", "staging").unwrap(),
        "/system/function/figlet?namespace=staging"
    );
}
