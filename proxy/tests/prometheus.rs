use mockito::Matcher;
use proxy::prometheus::PrometheusQuery;
use proxy::utils::QUERY_PATH;
use std::time::Duration;

fn query_client() -> PrometheusQuery {
    let address = mockito::server_address();
    PrometheusQuery::new(
        address.ip().to_string().as_str(),
        address.port(),
        Duration::from_secs(3),
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_vector() {
    let query = r#"sum(rate(gateway_function_invocation_total{function_name="hello", code=~".*"}[5m])) by (code, function_name)"#;
    let mok = mockito::mock("GET", QUERY_PATH)
        .match_query(Matcher::UrlEncoded("query".into(), query.into()))
        .with_status(200)
        .with_body(
            r#"{"status": "success", "data": {"resultType": "vector", "result": [
                {"metric": {"code": "200", "function_name": "hello"}, "value": [1612345678.1, "0.25"]},
                {"metric": {"code": "500", "function_name": "hello"}, "value": [1612345678.1, "0.05"]}
            ]}}"#,
        )
        .create();

    let res = query_client().fetch(query).await;
    assert!(res.is_ok());
    let res = res.unwrap();
    assert_eq!(res.data.result.len(), 2);
    assert_eq!(res.data.result[0].value().unwrap(), 0.25);
    mok.assert();
}

#[tokio::test]
async fn test_fetch_server_error() {
    let _mok = mockito::mock("GET", QUERY_PATH)
        .match_query(Matcher::UrlEncoded("query".into(), "broken_query".into()))
        .with_status(400)
        .with_body(r#"{"status": "error", "errorType": "bad_data"}"#)
        .create();

    let res = query_client().fetch("broken_query").await;
    assert!(res.is_err());
    assert!(format!("{:?}", res).contains("Server returned unexpected status code"));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let _mok = mockito::mock("GET", QUERY_PATH)
        .match_query(Matcher::UrlEncoded("query".into(), "malformed".into()))
        .with_status(200)
        .with_body(r#"{"status": "success", "data": {"result": [{"value": "oops"}]}}"#)
        .create();

    let res = query_client().fetch("malformed").await;
    assert!(res.is_err());
    assert!(format!("{:?}", res).contains("can't decode prometheus response"));
}

#[tokio::test]
async fn test_fetch_unreachable() {
    // nothing listens on port 1
    let client = PrometheusQuery::new("127.0.0.1", 1, Duration::from_millis(500)).unwrap();
    let res = client.fetch("up").await;
    assert!(res.is_err());
    assert!(format!("{:?}", res).contains("can't query prometheus"));
}
