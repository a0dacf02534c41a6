use super::Error;
use serde::{de::DeserializeOwned, Deserialize};

/// Body of every GraphQL answer, successful or not
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

pub enum Response<T> {
    Success(T),
    Error(Error),
}

impl<T> Response<T> {
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(payload) => Ok(payload),
            Response::Error(error) => Err(error),
        }
    }
}

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Self;
}

impl<T> AsyncFrom<reqwest::Response> for Response<T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status().as_u16();
        log::debug!("response status: {}", status);

        let text = match value.text().await {
            Ok(text) => text,
            Err(cause) => return Response::Error(Error::ReadResponseTextError { cause }),
        };

        if !(200..300).contains(&status) {
            return Response::Error(Error::GenericResponseError {
                status,
                message: text,
            });
        }

        Response::from_body(&text)
    }
}

impl<T> Response<T>
where
    T: DeserializeOwned,
{
    /// GraphQL reports most failures with a 200 status, so the `errors`
    /// array wins over any partial `data`.
    fn from_body(text: &str) -> Self {
        let envelope = match serde_json::from_str::<Envelope<T>>(text) {
            Ok(envelope) => envelope,
            Err(cause) => return Response::Error(Error::ParseResponseError { cause }),
        };

        if !envelope.errors.is_empty() {
            return Response::Error(Error::GraphqlError {
                messages: envelope
                    .errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect(),
            });
        }

        match envelope.data {
            Some(payload) => Response::Success(payload),
            None => Response::Error(Error::MissingDataError),
        }
    }
}
