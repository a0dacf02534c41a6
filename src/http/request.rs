use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<V: Serialize> {
    pub query: String,
    pub variables: V,
}

impl<V: Serialize> GraphqlRequest<V> {
    pub fn new(query: impl Into<String>, variables: V) -> Self {
        GraphqlRequest {
            query: query.into(),
            variables,
        }
    }
}
