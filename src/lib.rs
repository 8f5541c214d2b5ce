//! health-bridge: a client library for reading and writing health data
//! through Apple HealthKit and Google Health Connect, spoken over a generic
//! "invoke a named remote method with a JSON payload" channel.
//!
//! The native plugin on the other end of the channel does the actual store
//! access and permission negotiation; this crate owns the typed surface on
//! this side of the boundary:
//!
//! - [`envelope`]: the encoder reducing typed values into the
//!   self-describing `{value, type, subtype, class_name}` wire envelope.
//! - [`params`]: validated, single-use parameter objects, one per remote
//!   operation, with defaults filled at construction.
//! - [`client`]: async and blocking call wrappers over a user-implemented
//!   [`channel::MethodChannel`].
//!
//! Remote failures degrade (`false`, `[]`, `None`) instead of erroring:
//! a denied permission is an expected outcome, and the library stays usable
//! when the native side is unreachable.

pub mod channel;
pub mod client;
pub mod envelope;
pub mod error;
pub mod params;
pub mod types;

pub use channel::{ChannelError, MethodCall, MethodChannel};
pub use client::HealthClient;
pub use envelope::{wrap, Envelope, ParamValue, TypeTag, WireEnum};
pub use error::{Error, Result};
