//! Angle overlay engine for click-built planar graphs.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The user
//! clicks points on a canvas, optionally over an uploaded image; each click
//! either creates a vertex or selects an existing one and connects it to the
//! previously active vertex. At every vertex where two or more edges meet,
//! the engine overlays arcs and degree labels for the angles between them.
//! The host JavaScript layer only wires DOM events to [`web::AngleCanvas`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`graph`] | Vertex/edge store and its invariants |
//! | [`hit`] | Hit-testing a pointer against vertices |
//! | [`input`] | Pointer-up event and the click state machine |
//! | [`pivot`] | Vertices with two or more incident edges |
//! | [`angle`] | Normalized edge direction angles |
//! | [`layout`] | Angle ordering, arc radii and label placement |
//! | [`render`] | Full-scene redraw and the canvas surface |
//! | [`surface`] | Drawing surface trait and a recording surface |
//! | [`loader`] | Generation-guarded async resource slots |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`web`] | `wasm-bindgen` exports |
//! | [`config`] | Engine configuration |
//! | [`error`] | Engine error type and `JsValue` conversions |
//! | [`logging`] | Console logger and panic hook setup |
//! | [`geom`] | Points, sizes and canvas fitting |
//! | [`consts`] | Shared numeric constants (hit box, radii, canvas limits) |

pub mod angle;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod graph;
pub mod hit;
pub mod input;
pub mod layout;
pub mod loader;
pub mod logging;
pub mod pivot;
pub mod render;
pub mod surface;
pub mod web;
