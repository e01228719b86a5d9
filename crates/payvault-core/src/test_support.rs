//! Fixtures shared by unit tests: a mock catalog host and canned catalog
//! documents.

use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock catalog host serving fixed JSON bodies. Unmatched paths answer 404.
///
/// The remote catalog uses the blocking reqwest client, which must not run
/// inside an async context. The mock server therefore gets its own runtime and
/// tests call the client from the plain test thread.
pub(crate) struct CatalogServer {
    server: MockServer,
    _runtime: Runtime,
}

impl CatalogServer {
    pub(crate) fn start(routes: &[(&str, &str)]) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("mock server runtime");
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            for (route, body) in routes {
                Mock::given(method("GET"))
                    .and(path(*route))
                    .respond_with(
                        ResponseTemplate::new(200)
                            .set_body_raw(body.as_bytes().to_vec(), "application/json"),
                    )
                    .mount(&server)
                    .await;
            }
            server
        });
        Self {
            server,
            _runtime: runtime,
        }
    }

    pub(crate) fn uri(&self) -> String {
        self.server.uri()
    }
}

pub(crate) const XSS_DOCUMENT: &str = r#"{"payloads": [
    {"id": "xss-001", "title": "Basic alert", "payload": "<script>alert(1)</script>",
     "category": "XSS", "subcategory": "Reflected", "tags": ["script"], "level": "high"},
    {"id": "xss-002", "title": "Image onerror", "payload": "<img src=x onerror=alert(1)>",
     "category": "XSS", "subcategory": "DOM", "tags": ["img", "event"]}
]}"#;

pub(crate) const SQLI_DOCUMENT: &str = r#"{"payloads": [
    {"id": "sqli-001", "title": "Union select", "code": "' UNION SELECT NULL--",
     "category": "SQLi", "subcategory": "Union", "level": "medium"},
    {"title": "Missing body"}
]}"#;
