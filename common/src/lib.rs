//! Shared model and core logic for the testimonials carousel.
//!
//! Both the backend and the wasm frontend depend on this crate, so nothing in
//! here touches the network, the DOM or a clock. Time-dependent behavior takes
//! the current time as an argument.

pub mod carousel;
pub mod mapper;
pub mod model;
pub mod text;
