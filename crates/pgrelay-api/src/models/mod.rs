//! Request, response, and catalog models for the pgrelay API

pub mod catalog;
pub mod command;
pub mod command_result;
pub mod requests;

pub use command::Command;
pub use command_result::CommandResult;
