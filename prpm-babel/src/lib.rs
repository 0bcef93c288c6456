//! Multi-format interoperability for prompt packages
//!
//!     This crate provides a uniform interface for converting AI-assistant
//!     configuration documents (rules, agents, skills, prompts) between the
//!     native file formats of different coding-assistant editors, through a
//!     shared canonical model (see the prpm-canonical crate).
//!
//! Architecture
//!
//!     - Format trait: Uniform interface for all ecosystems (parsing and/or conversion)
//!     - FormatRegistry: Centralized discovery and dispatch of formats
//!     - Format implementations: Concrete implementations for each supported ecosystem
//!
//!     This is a pure lib: it powers the CLI and the registry service but is
//!     shell agnostic. No code here may suppose a shell environment, std
//!     print, env vars, the filesystem or the network. Callers hand in text
//!     and resolved configuration; diagnostics travel back in the returned
//!     values, never through a logger.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # FormatError
//!     ├── format.rs               # Format trait, Conversion, ConvertOptions
//!     ├── registry.rs             # FormatRegistry for discovery and dispatch
//!     ├── detection.rs            # best-effort format auto-sensing
//!     ├── frontmatter.rs          # YAML front matter split/parse/emit
//!     ├── heuristics.rs           # section-kind inference, markers, tag vocabulary
//!     ├── quality.rs              # lossy classification and fidelity scoring
//!     ├── render.rs               # markdown block rendering shared by converters
//!     ├── scan.rs                 # line scanner shared by markdown parsers
//!     ├── formats
//!     │   ├── <ecosystem>
//!     │   │   ├── parser.rs       # native text → canonical (when supported)
//!     │   │   ├── serializer.rs   # canonical → native text (when supported)
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!
//! Conversion contract
//!
//!     Every converter returns a Conversion: the native text, a warning
//!     list, a lossy flag, and a 0-100 fidelity score. Content the target
//!     cannot express is never an error: it is dropped with a warning that
//!     the shared quality rule classifies as lossy, so scores stay
//!     comparable across ecosystems. The one error a converter may raise is
//!     missing required configuration (kiro's inclusion mode), because
//!     silently guessing there would change editor behavior.
//!
//!     Parsers for human-authored formats never fail. Malformed front
//!     matter degrades to "absent", stray structure degrades to plain
//!     content, and the worst case is a package holding only its metadata
//!     section. Loss happens at the converter boundary, never at the
//!     parser boundary.
//!
//! Concurrency
//!
//!     Everything here is purely functional over its inputs: no shared
//!     mutable state, no I/O, no blocking. Formats are Send + Sync; one
//!     registry may serve any number of threads.

pub mod detection;
pub mod error;
pub mod format;
pub mod formats;
pub mod frontmatter;
pub mod heuristics;
pub mod quality;
pub mod registry;
pub mod render;
pub mod scan;

pub use detection::detect_format;
pub use error::FormatError;
pub use format::{ConvertOptions, Conversion, Format};
pub use registry::FormatRegistry;
