//! # Block Parsing
//!
//! Line-oriented block parsing shared by every dialect.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line outside an open block
//!    is classified into a `LineClass` using only the rules its dialect allows
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` collects fenced code
//!    and callout bodies, emits one `RenderNode` per other line, and hands
//!    callout bodies back to `parse_block` with the nested dialect
//!
//! 3. **List Grouping** (`group`): A fold over the finished node stream merges
//!    adjacent list items into `List` nodes
//!
//! ## Modules
//!
//! - **`types`**: Render tree types (`RenderNode`, `ListItem`, `List`, `CalloutKind`)
//! - **`kinds`**: Marker-owning types (`CodeFence`, `CalloutMarker`, `BoldHeading`, `ListMarker`)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//! - **`group`**: `group_lists` post-processing fold
//!
//! ## Key Invariants
//!
//! - Fenced code is a raw zone: no block or inline rules apply inside
//! - Callouts nest at most one level deep
//! - Malformed input never fails; unterminated blocks close at end of input

pub mod builder;
pub mod classify;
pub mod group;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use group::group_lists;
pub use types::{CalloutKind, List, ListItem, RenderNode};
