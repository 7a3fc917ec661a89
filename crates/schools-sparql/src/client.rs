//! SPARQL HTTP client.
//!
//! Queries are POSTed as the `query` form field with `Accept: text/csv`.
//! The CSV header row is dropped and every cell is passed through
//! [`shorten_uri`].

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use schools_core::SparqlConfig;

use crate::uri::shorten_uri;
use crate::Row;

/// Query client errors.
#[derive(Error, Debug)]
pub enum SparqlError {
    #[error("SPARQL request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SPARQL endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("SPARQL response is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Malformed CSV response: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for query operations.
pub type SparqlResult<T> = Result<T, SparqlError>;

/// Client for a single SPARQL endpoint.
#[derive(Clone)]
pub struct SparqlClient {
    endpoint: String,
    uri_prefix: String,
    client: reqwest::Client,
}

impl SparqlClient {
    /// Create a client from configuration.
    pub fn new(config: &SparqlConfig) -> SparqlResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            uri_prefix: config.uri_prefix.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a SELECT query and return its rows without the header.
    pub async fn query(&self, sparql: &str) -> SparqlResult<Vec<Row>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "text/csv")
            .form(&[("query", sparql)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SparqlError::Status { status, body });
        }

        let body = String::from_utf8(response.bytes().await?.to_vec())?;
        let rows = self.decode(&body)?;

        debug!(endpoint = %self.endpoint, rows = rows.len(), "SPARQL query returned");
        Ok(rows)
    }

    /// Decode a CSV result body.
    ///
    /// Records may have any number of fields; shape checks happen later.
    pub fn decode(&self, body: &str) -> SparqlResult<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|cell| shorten_uri(&self.uri_prefix, cell))
                    .collect(),
            );
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PREFIX: &str = "https://schools.ontotext.com/data/resource/";

    fn client(endpoint: String) -> SparqlClient {
        SparqlClient::new(&SparqlConfig {
            endpoint,
            uri_prefix: PREFIX.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_decode_drops_header_and_shortens() {
        let body = concat!(
            "school,schoolName,schoolPlace\r\n",
            "https://schools.ontotext.com/data/resource/school/1,",
            "\"СУ \"\"Иван Вазов\"\"\",",
            "https://schools.ontotext.com/data/resource/city/68134\r\n",
        );
        let rows = client("http://unused".to_string()).decode(body).unwrap();

        assert_eq!(
            rows,
            vec![vec![
                "school:1".to_string(),
                "СУ \"Иван Вазов\"".to_string(),
                "city:68134".to_string(),
            ]]
        );
    }

    #[test]
    fn test_decode_keeps_ragged_rows() {
        let body = "a,b\r\n1,2\r\n3\r\n4,5,6\r\n";
        let rows = client("http://unused".to_string()).decode(body).unwrap();
        let lengths: Vec<_> = rows.iter().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![2, 1, 3]);
    }

    #[test]
    fn test_decode_header_only() {
        let rows = client("http://unused".to_string()).decode("city,cityLabel\r\n").unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_query_posts_form_and_parses_csv() {
        let server = MockServer::start().await;
        let body =
            "city,cityLabel\r\nhttps://schools.ontotext.com/data/resource/city/1,София\r\n";

        Mock::given(method("POST"))
            .and(path("/repositories/schools"))
            .and(header("accept", "text/csv"))
            .and(body_string_contains("query=SELECT"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(format!("{}/repositories/schools", server.uri()));
        let rows = client.query("SELECT ?city ?cityLabel WHERE {}").await.unwrap();

        assert_eq!(rows, vec![vec!["city:1".to_string(), "София".to_string()]]);
    }

    #[tokio::test]
    async fn test_query_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("MALFORMED QUERY"))
            .mount(&server)
            .await;

        let client = client(server.uri());
        let err = client.query("SELEC").await.unwrap_err();

        match err {
            SparqlError::Status { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(body, "MALFORMED QUERY");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_query_invalid_utf8() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
            .mount(&server)
            .await;

        let err = client(server.uri()).query("SELECT").await.unwrap_err();
        assert!(matches!(err, SparqlError::Utf8(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_query_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/sparql"))
            .query("SELECT")
            .await
            .unwrap_err();
        assert!(matches!(err, SparqlError::Http(_)), "unexpected error: {err}");
    }
}
