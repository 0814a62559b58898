use once_cell::sync::Lazy;
use reqwest::{
	header::{ HeaderName, HeaderValue },
	Client, IntoUrl, Method, RequestBuilder
};
use serde::{ de::DeserializeOwned, Deserialize, Serialize };
use std::{
	future::{ Future, IntoFuture },
	marker::PhantomData,
	pin::Pin,
	time::Duration
};

use crate::API_URL;

pub static HTTP: Lazy<Client> = Lazy::new(||
	Client::builder()
		.timeout(Duration::from_secs(10))
		.build()
		.unwrap()
);

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
	#[error("HTTP Error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Query Error: {0}")]
	Remote(String),

	#[error("Query returned no data")]
	MissingData
}

pub struct FetchJson<T: DeserializeOwned> {
	phantom: PhantomData<T>,
	request: RequestBuilder
}

impl<T: DeserializeOwned> FetchJson<T> {
	pub fn new(request: RequestBuilder) -> Self {
		Self {
			phantom: PhantomData,
			request
		}
	}

	pub fn header<K, V>(mut self, key: K, value: V) -> Self
	where
		HeaderName: TryFrom<K>,
		<HeaderName as TryFrom<K>>::Error: Into<http::Error>,
		HeaderValue: TryFrom<V>,
		<HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
	{
		self.request = self.request.header(key, value);
		self
	}

	pub fn bearer_auth(mut self, token: &str) -> Self {
		self.request = self.request.bearer_auth(token);
		self
	}

	pub fn form<F: Serialize + ?Sized>(mut self, form: &F) -> Self {
		self.request = self.request.form(form);
		self
	}

	pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
		self.request = self.request.json(body);
		self
	}
}

impl<T: DeserializeOwned + Send + 'static> IntoFuture for FetchJson<T> {
	type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;
	type Output = Result<T, reqwest::Error>;

	fn into_future(self) -> Self::IntoFuture {
		Box::pin(async move {
			self
				.request
				.send()
				.await?
				.error_for_status()?
				.json()
				.await
		})
	}
}

pub fn fetch_json<T: DeserializeOwned, U: IntoUrl>(url: U, method: Method) -> FetchJson<T> {
	FetchJson::new(HTTP.request(method, url))
}

pub fn get_json<T: DeserializeOwned, U: IntoUrl>(url: U) -> FetchJson<T> {
	FetchJson::new(HTTP.get(url))
}

pub fn post_json<T: DeserializeOwned, U: IntoUrl>(url: U) -> FetchJson<T> {
	FetchJson::new(HTTP.post(url))
}

#[derive(Deserialize)]
struct QueryResponse<T> {
	data: Option<T>,
	#[serde(default)]
	errors: Vec<QueryResponseError>
}

#[derive(Deserialize)]
struct QueryResponseError {
	message: String
}

// the remote query api speaks a graphql-shaped protocol: one POST carrying
// the document and its variables, answered with { data, errors }
pub async fn query<T: DeserializeOwned + Send + 'static>(
	document: &str,
	variables: serde_json::Value,
	session_token: Option<&str>
) -> Result<T, QueryError> {
	let mut request = post_json::<QueryResponse<T>, _>(API_URL.as_str())
		.json(&serde_json::json!({
			"query": document,
			"variables": variables
		}));
	if let Some(token) = session_token {
		request = request.bearer_auth(token);
	}

	let response = request.await?;
	if let Some(error) = response.errors.into_iter().next() {
		return Err(QueryError::Remote(error.message));
	}

	response.data.ok_or(QueryError::MissingData)
}
