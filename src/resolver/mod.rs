//! Query Resolver Module
//!
//! Turns a decoded query into a verdict. Decides, per the re-read policy fixed at
//! startup, whether to read the corpus fresh from storage or to use the shared
//! cached set, then runs the selected search strategy over that view.
//!
//! ## Submodules
//! - **`service`**: The `QueryResolver` and its policy handling.

pub mod service;
