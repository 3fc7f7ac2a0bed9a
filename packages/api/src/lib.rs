//! # API crate: typed HTTP client for the campus backend
//!
//! Every page of the web client talks to the backend through this crate. It
//! owns the wire schema, the bearer-token transport and the mapping of HTTP
//! failures to user-facing messages.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token, status classification |
//! | [`error`] | [`ApiError`] and the status → message rules |
//! | [`models`] | Canonical wire types, tolerant of numeric-string ids and 0/1 flags |
//! | [`auth`] | `POST /login` and `POST /signup` |
//! | [`session`] | [`SessionManager`]: restore / login / register / logout over a [`store::KeyValueStore`] |
//! | [`courses`] | Enrolled courses, timetable, catalog, registration |
//! | [`posts`] | Notice, material and assignment boards plus comments |
//! | [`dashboard`] | Dashboard summary |
//! | [`assignments`] | Assignment overview across courses |
//! | [`grades`] | Grade history and GPA |
//! | [`accounts`] | Account administration |
//!
//! ## Authentication
//!
//! Every call except login and signup needs a token. A client without one
//! fails with [`ApiError::MissingToken`] before any request is sent; a 401
//! from the backend becomes [`ApiError::Unauthorized`], which the UI answers
//! by sending the user back to the login page.

pub mod accounts;
pub mod assignments;
pub mod auth;
pub mod client;
pub mod courses;
pub mod dashboard;
pub mod error;
pub mod grades;
pub mod models;
pub mod posts;
pub mod session;

pub use auth::Registration;
pub use client::ApiClient;
pub use error::ApiError;
pub use session::SessionManager;
