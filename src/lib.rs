//! CText Editor Library
//!
//! A small terminal text editor. This crate provides:
//!
//! - `core`: Lines with tab-expanded render forms, the document, cursor, and viewport
//! - `editor`: The editing engine, key bindings, and filename prompt
//! - `storage`: Loading and saving documents as plain text
//! - `input`: Decoding terminal bytes into key presses
//! - `terminal`: Raw mode and window size
//! - `renderer`: Composing screen frames
//! - `app`: Configuration, logging, and the input loop

pub mod app;
pub mod core;
pub mod editor;
pub mod input;
pub mod renderer;
pub mod storage;
pub mod terminal;
