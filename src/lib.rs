//! protoc-gen-twirp_java_jaxrs library
//!
//! This crate provides the code generation logic for turning Protocol Buffer
//! service definitions into Java Twirp service interfaces and JAX-RS clients.

#![deny(warnings)]
#![deny(missing_docs)]

pub mod codegen;
pub mod comments;
pub mod generator;
pub mod names;
pub mod options;
pub mod types;

use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Invalid plugin configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file listed in `file_to_generate` has no descriptor (strict mode only)
    #[error("Requested file not found in request: {0}")]
    MissingInput(String),

    /// Two artifacts resolved to the same output path (deny_collisions only)
    #[error("Generated path {path} collides: {first} and {second}")]
    PathCollision {
        /// The contested output path
        path: String,
        /// Origin of the artifact that claimed the path first
        first: String,
        /// Origin of the artifact that claimed it again
        second: String,
    },

    /// Failed to decode protobuf message
    #[error("Decode error: {0}")]
    DecodeError(String),
}

/// Generate Twirp interfaces and clients from a protobuf CodeGeneratorRequest
///
/// This is the main entry point for the code generator.
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    generator::generate(request)
}

/// Generate Twirp interfaces and clients from raw CodeGeneratorRequest bytes
pub fn generate_from_bytes(bytes: &[u8]) -> Result<CodeGeneratorResponse, GeneratorError> {
    generator::generate_from_bytes(bytes)
}
