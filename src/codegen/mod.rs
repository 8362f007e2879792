//! Code generation for Twirp service interfaces and clients
//!
//! This module contains the Java templates emitted for every protobuf
//! service: the interface describing the service and the JAX-RS client
//! implementing it.

pub mod client;
pub mod interface;
pub mod printer;

use crate::names::java_package;
use crate::types::TypeResolver;
use printer::Printer;
use prost_types::compiler::code_generator_response::File;
use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};

/// Name reported in the banner of every generated file
pub const PLUGIN_NAME: &str = "protoc-gen-twirp_java_jaxrs";

/// Media type of protobuf request and response bodies
pub const CONTENT_TYPE: &str = "application/protobuf";

/// A service together with everything needed to name its artifacts
#[derive(Debug, Clone, Copy)]
pub struct ServiceTarget<'a> {
    /// File declaring the service
    pub file: &'a FileDescriptorProto,
    /// The service itself
    pub service: &'a ServiceDescriptorProto,
    /// Position of the service within the file
    pub index: usize,
    /// Resolver for message type references
    pub types: &'a TypeResolver,
}

impl<'a> ServiceTarget<'a> {
    /// Every service of a file, in declaration order
    pub fn all(
        file: &'a FileDescriptorProto,
        types: &'a TypeResolver,
    ) -> impl Iterator<Item = ServiceTarget<'a>> + 'a {
        file.service
            .iter()
            .enumerate()
            .map(move |(index, service)| ServiceTarget {
                file,
                service,
                index,
                types,
            })
    }

    /// Java class of a method's request message
    pub fn input_type(&self, method: &MethodDescriptorProto) -> String {
        self.types.resolve(self.file, method.input_type())
    }

    /// Java class of a method's response message
    pub fn output_type(&self, method: &MethodDescriptorProto) -> String {
        self.types.resolve(self.file, method.output_type())
    }

    /// Human readable origin, e.g. `happy/hat.proto:Haberdasher`
    pub fn origin(&self) -> String {
        format!("{}:{}", self.file.name(), self.service.name())
    }
}

/// Generate the interface and then the client for a service
pub fn generate_service(target: &ServiceTarget<'_>) -> [File; 2] {
    [interface::generate(target), client::generate(target)]
}

/// Banner and package statement shared by every generated file
fn write_preamble(p: &mut Printer, file: &FileDescriptorProto) {
    p.line(&["// Code generated by ", PLUGIN_NAME, ", DO NOT EDIT."]);
    p.line(&["// source: ", file.name()]);
    p.blank();

    let pkg = java_package(file);
    if !pkg.is_empty() {
        p.line(&["package ", pkg, ";"]);
        p.blank();
    }
}
