//! Main module for goo library functionality
//!
//! Source text flows one way: [lexing] turns it into tokens, [parsing] into a
//! [Document](ast::Document), and [building] into [GenericNode](building::GenericNode)s that a
//! rendering backend walks. [formats] serializes built trees, [pipeline] chains everything.

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod testing;
pub mod token;
