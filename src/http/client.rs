use super::{
    request::GraphqlRequest,
    response::{AsyncFrom, Response},
    Error, Headers,
};
use serde::{de::DeserializeOwned, Serialize};

/// GraphQL endpoint plus the credentials used for every call
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    url: String,
    token: String,
}

impl Client {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Client {
        Client {
            inner: reqwest::Client::new(),
            url: url.into(),
            token: token.into(),
        }
    }

    pub async fn send<V, T>(&self, request: &GraphqlRequest<V>) -> Result<T, Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .inner
            .post(&self.url)
            .default_headers(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|cause| Error::SendRequestError { cause })?;

        Response::<T>::async_from(response).await.collect()
    }
}
