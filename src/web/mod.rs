//! The gateway web server.
//!
//! This module provides the HTTP surface using Axum. Users can submit text
//! from the landing page form or POST it directly; the gateway validates it
//! and relays it to the annotation server.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080 against localhost:9000
//! anno-gateway serve
//!
//! # Custom bind address and annotation server
//! anno-gateway serve --address 0.0.0.0 --annotation-host corenlp
//!
//! # Expose the JSON API route as well
//! anno-gateway serve --api --open
//! ```
//!
//! ## Endpoints
//!
//! - `GET /` - Landing page with the text input form
//! - `POST /process` - Annotate text submitted as a form field
//! - `POST /api/process` - Annotate text from a JSON body (with `--api`)

pub mod server;
