//! The remote dispatch channel: the user-provided seam between this library
//! and the native plugin host.
//!
//! The library's only obligations toward the channel are to produce the
//! `data` argument correctly, pass `wait_timeout` through unchanged, and
//! never retry on its own.

use async_trait::async_trait;

/// One invocation of a named remote method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall<'a> {
    /// Remote method name, e.g. `"request_authorization"`.
    pub method: &'a str,
    /// Serialized argument blob (a single envelope or a field → envelope
    /// map), absent for argument-less methods.
    pub data: Option<String>,
    /// Whether the caller will consume a reply.
    pub wait_for_result: bool,
    /// Seconds to wait for the reply before giving up.
    pub wait_timeout: f64,
}

impl<'a> MethodCall<'a> {
    pub fn new(method: &'a str, data: Option<String>, wait_timeout: f64) -> Self {
        MethodCall {
            method,
            data,
            wait_for_result: true,
            wait_timeout,
        }
    }

    /// A fire-and-forget call: no reply is awaited.
    pub fn fire_and_forget(method: &'a str) -> Self {
        MethodCall {
            method,
            data: None,
            wait_for_result: false,
            wait_timeout: 0.0,
        }
    }
}

/// Channel-level failure (wraps arbitrary error strings from the host).
///
/// The client never surfaces these to callers; they degrade into the
/// operation's negative result (`false`, `[]`, `None`).
#[derive(Debug, Clone)]
pub struct ChannelError {
    pub message: String,
}

impl ChannelError {
    pub fn new(message: impl Into<String>) -> Self {
        ChannelError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ChannelError {}

/// User-implemented invoke channel.
///
/// Implementations own scheduling, cancellation, and timeout enforcement.
/// A reply of `Ok(None)` means the host produced no result (timeout,
/// unsupported method, or a void method).
#[async_trait]
pub trait MethodChannel: Send + Sync {
    async fn invoke(&self, call: MethodCall<'_>) -> Result<Option<String>, ChannelError>;
}
