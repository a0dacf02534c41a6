pub mod client;
pub mod request;
pub mod response;

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    RequestBuilder,
};
use thiserror::Error;

pub use client::Client;

const USER_AGENT_VALUE: &str = "prassign";

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("unexpected status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("graphql: {}", .messages.join("; "))]
    GraphqlError { messages: Vec<String> },
    #[error("response carried no data")]
    MissingDataError,
}
