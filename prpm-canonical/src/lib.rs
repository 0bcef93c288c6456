//! Canonical document model for prompt-package conversion
//!
//!     This crate defines the format-agnostic representation that every
//!     supported editor ecosystem maps onto. A package parsed from any native
//!     format becomes a CanonicalPackage; every converter consumes one.
//!
//!     The model is pure data: no parsing, no rendering, no I/O. All behavior
//!     lives in prpm-babel. Keeping the model in its own crate mirrors the
//!     split between AST definitions and format interop in the rest of the
//!     toolchain, and keeps converter crates from depending on each other.
//!
//! Structure
//!
//!     .
//!     ├── package.rs      # CanonicalPackage, CanonicalContent, PackageMeta
//!     ├── section.rs      # Section sum type plus Rule, Example, enums
//!     └── lib.rs
//!
//! Serialization
//!
//!     Everything derives Serialize/Deserialize. The canonical JSON envelope
//!     (format "canonical", version "1.0", camelCase keys, internally tagged
//!     sections) is itself a wire format: the registry exposes it as just
//!     another Format, so a canonical document can be stored and re-read
//!     without a private API.

pub mod package;
pub mod section;

pub use package::{CanonicalContent, CanonicalPackage, PackageMeta};
pub use section::{Example, InclusionMode, Priority, Rule, Section};
