//! Core functionality: the two stores, their persistence, navigation and configuration

pub mod catalog;
pub mod command_book;
pub mod config;
pub mod error;
pub mod flow;
pub mod navigator;
pub mod persist;
pub mod state;
