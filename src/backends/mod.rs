//! Runtime backends for `vrinput`.
//!
//! Implementations of [`InputGateway`](crate::gateway::InputGateway) that the
//! controller can be built on.
//!
//! # Feature flags
//! - **`virtual`** — enables the in-memory [`VirtualRuntime`](virtual_runtime::VirtualRuntime)
//!   (default in this build).
//!
//! Bindings to a native runtime implement the trait in the host application.

#[cfg(feature = "virtual")]
#[cfg_attr(docsrs, doc(cfg(feature = "virtual")))]
pub mod virtual_runtime;
