pub mod github_client;
mod queries;
mod request;
mod response;

pub use github_client::{GithubClient, DEFAULT_API_URL};
