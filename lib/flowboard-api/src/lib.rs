//! # FlowBoard API client
//!
//! Typed, async HTTP client for the FlowBoard task board API.
//!
//! The crate splits into three layers:
//! - **[`client`]** - the runtime: request assembly, credentials, content
//!   negotiation and dispatch
//! - **[`api`]** - one service per server controller ([`api::TasksApi`],
//!   [`api::ProjectsApi`], ...)
//! - **[`models`]** - the wire types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowboard_api::ApiClient;
//! use flowboard_api::models::TaskStatus;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder()
//!     .with_base_path("https://flowboard.example.com/api")
//!     .with_access_token(std::env::var("FLOWBOARD_TOKEN")?)
//!     .build()?;
//!
//! // Awaiting a call yields the decoded body.
//! let tasks = client.tasks().get_all_tasks()?.await?;
//! let open = tasks
//!     .iter()
//!     .filter(|task| task.status == Some(TaskStatus::Open))
//!     .count();
//! println!("{open} open tasks");
//! # Ok(())
//! # }
//! ```
//!
//! ## Response shapes
//!
//! Every operation returns a [`Call`] handle. Awaiting it decodes the body;
//! [`Call::with_response`] keeps status and headers, [`Call::into_raw`] skips
//! decoding entirely, and [`Call::events`] streams the request lifecycle
//! (sent, headers, progress, done) for long downloads:
//!
//! ```rust,no_run
//! use flowboard_api::{ApiClient, CallEvent};
//! # use uuid::Uuid;
//!
//! # async fn demo(client: &ApiClient, id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
//! let mut events = client.reports().get_report_download_url(id)?.events();
//! while let Some(event) = events.next().await {
//!     match event {
//!         CallEvent::Progress { loaded, total } => println!("{loaded}/{total:?}"),
//!         CallEvent::Done(response) => println!("url: {:?}", response.body.download_url),
//!         CallEvent::Failed(error) => return Err(error.into()),
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Tokens that rotate
//!
//! A provider closure is consulted on every request, so refreshing tokens
//! reach the wire without rebuilding the client:
//!
//! ```rust,no_run
//! use flowboard_api::ApiClient;
//!
//! # fn current_token() -> Option<String> { None }
//! # fn main() -> Result<(), flowboard_api::ApiClientError> {
//! let client = ApiClient::builder()
//!     .with_access_token_provider(current_token)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod models;

pub use self::client::{
    ApiClient, ApiClientBuilder, ApiClientError, ApiResponse, Call, CallEvent, CallEvents,
    CredentialSource, ParameterCodec, RawResponse, SecureString, Transport,
};
