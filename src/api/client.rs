use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::RequestError;
use crate::config::{ApiConfig, SecureString};

/// A request to the storefront API, built before it is sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    token: Option<SecureString>,
}

impl ApiRequest {
    /// `segments` are appended to the base URL and percent-encoded.
    pub fn new<S: AsRef<str>>(method: Method, segments: &[S]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            query: Vec::new(),
            body: None,
            token: None,
        }
    }

    pub fn get<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn put<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub fn delete<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Add query parameters from a flat serializable struct.
    ///
    /// `null` fields are skipped; other scalars are sent in their JSON form.
    pub fn query<Q: Serialize>(mut self, query: &Q) -> Result<Self, RequestError> {
        let Value::Object(map) = serde_json::to_value(query)? else {
            return Err(RequestError::InvalidRequest(
                "query parameters must serialize to an object".to_string(),
            ));
        };

        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => self.query.push((key, s)),
                Value::Object(_) | Value::Array(_) => {
                    return Err(RequestError::InvalidRequest(format!(
                        "query parameter '{}' is not a scalar",
                        key
                    )));
                }
                other => self.query.push((key, other.to_string())),
            }
        }
        Ok(self)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, RequestError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn bearer(mut self, token: Option<&SecureString>) -> Self {
        self.token = token.cloned();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL, for logs.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Single entry point for every call to the remote API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, RequestError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RequestError::InvalidRequest(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, RequestError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                RequestError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?;
            path.pop_if_empty().extend(&request.segments);
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    /// Send a request and decode the JSON body of a successful response.
    ///
    /// An empty success body decodes as JSON `null`, so `T = ()` works for
    /// endpoints that return nothing.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, RequestError> {
        let url = self.url_for(&request)?;
        tracing::debug!(
            method = %request.method,
            path = %request.path(),
            authenticated = request.has_token(),
            "API request"
        );

        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token.expose());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path = %request.path(), error = %e, "API unreachable");
            RequestError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let err = RequestError::from_response(status.as_u16(), &text);
            tracing::warn!(
                method = %request.method,
                path = %request.path(),
                status = status.as_u16(),
                error = %err,
                "API request failed"
            );
            return Err(err);
        }

        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    /// Method/path/body/token form of [`ApiClient::send`].
    ///
    /// `path` is split on `/`; each piece becomes one encoded segment.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&SecureString>,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut request = ApiRequest::new(method, &segments).bearer(token);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.send(request).await
    }
}
