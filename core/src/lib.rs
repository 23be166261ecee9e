//! # Pickr Engine
//!
//! The operations layered on top of the shared value types:
//!
//! * **[`draw`]**: Random ticket generation (the only place randomness is
//!   consumed).
//! * **[`winning`]**: The official draw result and entry evaluation.

pub mod draw;
pub mod winning;
