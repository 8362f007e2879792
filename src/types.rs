//! Message type name resolution
//!
//! Maps fully-qualified protobuf type references (`.happy.path.Hat`) to the
//! Java class names protobuf-java generates for them. The generated clients
//! have to compile against those classes, so the mapping follows the
//! defining file's `java_package`, `java_outer_classname` and
//! `java_multiple_files` options rather than the referencing file's.

use crate::names::{java_multiple_files, java_package, outer_class_name, qualify};
use prost_types::{DescriptorProto, FileDescriptorProto};
use std::collections::HashMap;

/// Resolves protobuf message references to Java class names
#[derive(Debug, Default)]
pub struct TypeResolver {
    /// Fully-qualified proto name (with leading dot) -> Java class name
    types: HashMap<String, String>,
}

impl TypeResolver {
    /// Index every message, nested ones included, of every file
    pub fn new(files: &[FileDescriptorProto]) -> Self {
        let mut resolver = Self::default();
        for file in files {
            resolver.index_file(file);
        }
        resolver
    }

    fn index_file(&mut self, file: &FileDescriptorProto) {
        let scope = JavaScope::of(file);
        let proto_prefix = if file.package().is_empty() {
            String::new()
        } else {
            format!(".{}", file.package())
        };

        for message in &file.message_type {
            self.index_message(&scope, &proto_prefix, "", message);
        }
    }

    fn index_message(
        &mut self,
        scope: &JavaScope,
        proto_prefix: &str,
        parent: &str,
        message: &DescriptorProto,
    ) {
        let nested = qualify(&[parent, message.name()]);
        self.types
            .insert(format!("{}.{}", proto_prefix, nested), scope.class_name(&nested));

        for child in &message.nested_type {
            self.index_message(scope, proto_prefix, &nested, child);
        }
    }

    /// Number of indexed message types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no message types are indexed
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Java class name for a type reference made from `file`
    ///
    /// References to types the resolver has not seen are assumed to live in
    /// `file` itself.
    pub fn resolve(&self, file: &FileDescriptorProto, type_ref: &str) -> String {
        if let Some(name) = self.types.get(type_ref) {
            return name.clone();
        }

        let relative = type_ref.strip_prefix('.').unwrap_or(type_ref);
        let relative = if file.package().is_empty() {
            relative
        } else {
            relative
                .strip_prefix(file.package())
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(relative)
        };
        JavaScope::of(file).class_name(relative)
    }
}

/// Java naming context of one proto file
struct JavaScope {
    package: String,
    outer_class: Option<String>,
}

impl JavaScope {
    fn of(file: &FileDescriptorProto) -> Self {
        Self {
            package: java_package(file).to_string(),
            outer_class: (!java_multiple_files(file)).then(|| outer_class_name(file)),
        }
    }

    /// Class name of a message given its dotted path inside the file
    fn class_name(&self, nested: &str) -> String {
        qualify(&[
            &self.package,
            self.outer_class.as_deref().unwrap_or_default(),
            nested,
        ])
    }
}
