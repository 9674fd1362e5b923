pub mod cancel;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod normalize;
pub mod probe;
pub mod types;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use client::{RecipeClient, LIST_CANDIDATES};
pub use config::{ApiConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_MS};
pub use error::{ClientError, FetchError};
pub use http::{ApiClient, ApiClientBuilder, HttpClient, MockClient, MockResponse};
pub use normalize::{normalize_recipe, recipe_from_detail_payload, recipes_from_list_payload};
pub use types::{Recipe, SearchCriteria};
