//! # Mock Framework
//!
//! Utilities for testing client wrappers without spawning a real [`ResourceActor`](super::ResourceActor).
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | None (scripted responses) | Real store |
//! | **Use case** | Logic *around* the client (error mapping, result unpacking) | The entity itself or the whole system |
//! | **Error injection** | `return_err` | Requires reaching the state |
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations with a fluent builder, then `verify()`.
//! - [`create_mock_client`] plus [`expect_create`] / [`expect_get`] / [`expect_action`]:
//!   receive raw requests and answer them by hand.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<User>::new();
//! mock.expect_get(Username::from("alice")).return_ok(Some(alice));
//!
//! let users = UserClient::new(mock.client());
//! assert!(users.find_by_username(&Username::from("alice")).await?.is_some());
//! mock.verify();
//! ```

use super::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        key: T::Key,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Action {
        key: T::Key,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

fn check_key<K: PartialEq + std::fmt::Debug>(expected: &K, actual: &K) {
    if expected != actual {
        panic!("Expected request for {expected:?}, got {actual:?}");
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation panics inside the mock task, which surfaces in the test as
/// `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) => {
                        check_key(&expected, &key);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action {
                            key, respond_to, ..
                        },
                        Some(Expectation::Action {
                            key: expected,
                            response,
                        }),
                    ) => {
                        check_key(&expected, &key);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `key`.
    pub fn expect_get(&mut self, key: T::Key) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation on `key`.
    pub fn expect_action(&mut self, key: T::Key) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    key: T::Key,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            key: self.key,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            key: self.key,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    key: T::Key,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            key: self.key,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            key: self.key,
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// Useful when a test needs to inspect the payload a client wrapper builds
/// (e.g. the exact `Action` it sends) before answering.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Key, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an `Action`.
#[allow(clippy::type_complexity)]
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Key,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            key,
            action,
            respond_to,
        }) => Some((key, action, respond_to)),
        _ => None,
    }
}
