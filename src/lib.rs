//! Configuration and access-control core for a Redis-over-HTTP gateway
//!
//! The gateway bridges HTTP requests onto the Redis protocol; this crate
//! owns the part with real semantics: loading the JSON configuration file
//! and building the read-only ACL chain used to authorize inbound clients
//! by source address.
//!
//! - **Configuration**: Redis and HTTP endpoints plus an `acl` array;
//!   unreadable or malformed files degrade to built-in defaults instead of
//!   failing the gateway.
//! - **Access control**: CIDR rules kept in bitmask form, so evaluating a
//!   client is a single mask-and-compare.
//! - **Credentials**: `http_basic_auth` values are base64-encoded at load
//!   time, ready for direct header comparison by the HTTP layer.
//! - **Command lists**: per-entry `enabled`/`disabled` command names with
//!   declaration order preserved.
//!
//! The built [`Config`] is immutable plain data: share it freely across
//! request-handling threads, no locking needed.
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "redis_host": "127.0.0.1",
//!   "redis_port": 6379,
//!   "http_host": "0.0.0.0",
//!   "http_port": 7379,
//!   "acl": [
//!     {
//!       "ip": "10.0.0.0/24",
//!       "http_basic_auth": "user:password",
//!       "enabled": ["GET", "SET"],
//!       "disabled": ["FLUSHALL"]
//!     }
//!   ]
//! }
//! ```

pub mod acl;
pub mod auth;
pub mod config;

// Re-export main types
pub use acl::{AclEntry, CidrRule};
pub use config::Config;
