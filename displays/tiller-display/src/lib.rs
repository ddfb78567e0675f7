//! Shared display components for Tiller
//!
//! This crate provides:
//! - `FrameBuffer`, a 128x64 page-organized monochrome buffer that
//!   implements the menu rendering contract entirely in RAM
//! - the 6x8 ASCII font used to rasterize menu text into it
//!
//! # Architecture
//!
//! Bus drivers (SSD1306, SH1106, ...) wrap a `FrameBuffer`, forward the
//! drawing half of the contract to it, and stream `pages()` to the
//! panel when the menu core flushes. The buffer layout matches what
//! those controllers expect, so a flush is a straight page-by-page
//! copy. Host tests use the buffer directly and assert on pixels.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod frame;

// Re-export key types
pub use frame::{FrameBuffer, HEIGHT, PAGES, WIDTH};
