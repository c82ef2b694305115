// src/record/mod.rs
//! Raw wiki text in, `Uniques.txt` record lines out.
//!
//! ```text
//! fragment::normalize_fragment   (per node, while reading the page)
//!         ↓
//! assemble::assemble_item        (per item)
//!   ├─ numeric::extract / strip_tokens / NumericToken::prefix
//!   └─ variant::variant_label
//! ```
//!
//! Everything here is pure: no I/O, no shared state.
pub mod assemble;
pub mod fragment;
pub mod numeric;
pub mod variant;

pub use assemble::{assemble_fragment, assemble_item, RecordLine};
pub use fragment::{normalize_fragment, FragmentKind};
pub use numeric::NumericToken;
