//! # Study Tracker
//!
//! > **An in-memory HTTP service for tracking technologies to study.**
//!
//! Users register with a name and a unique username, then manage a personal list of
//! technologies (title, deadline, studied flag) by sending their username in a
//! `username` header. All state lives in process memory.
//!
//! ## 🏗️ Architecture
//!
//! The Store is a **resource actor**: one Tokio task owns every [`User`](model::User)
//! and processes requests from its mailbox one at a time. HTTP handlers run in
//! parallel on the multi-threaded runtime but only ever reach user data by sending the
//! actor a message, so the username uniqueness check and the insert cannot interleave
//! with another request.
//!
//! ```text
//! request -> CurrentUser extractor -> handler -> UserClient -> ResourceActor<User>
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` and its client.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Domain ([`model`], [`user_actor`])
//! Users, their technologies, and the actions that change them.
//! - **Key items**: [`User`](model::User), [`Technology`](model::Technology),
//!   [`Deadline`](model::Deadline), [`UserAction`](user_actor::UserAction).
//!
//! ### 3. The Interface ([`clients`], [`http`])
//! [`UserClient`](clients::UserClient) hides message passing; the axum router maps it to
//! JSON endpoints and status codes.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! Starts and stops the Store, installs tracing, and reads settings from flags or the
//! environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 3000
//!
//! curl -X POST localhost:3000/users -H 'content-type: application/json' \
//!      -d '{"name":"Alice","username":"alice"}'
//! curl localhost:3000/technologies -H 'username: alice'
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
