// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message splitting and header parsing.

mod header;
mod message;

pub use header::ParsedHeader;
pub use message::CommitMessage;
