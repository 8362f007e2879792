//! Service interface generation
//!
//! One Java interface per protobuf service, one abstract method per RPC.

use super::printer::Printer;
use super::{write_preamble, ServiceTarget};
use crate::comments::{javadoc, method_comment, service_comment};
use crate::names::{artifact_path, interface_name, method_identifier, ArtifactKind};
use prost_types::compiler::code_generator_response::File;

/// Generate the Java interface for a service
pub fn generate(target: &ServiceTarget<'_>) -> File {
    let mut p = Printer::new();
    write_preamble(&mut p, target.file);

    if let Some(comment) = service_comment(target.file, target.index) {
        for line in javadoc(comment, "") {
            p.line(&[&line]);
        }
    }

    let class = interface_name(target.service);
    p.line(&["public interface ", &class, " {"]);

    for (index, method) in target.service.method.iter().enumerate() {
        let input_type = target.input_type(method);
        let output_type = target.output_type(method);
        let method_name = method_identifier(method);

        if let Some(comment) = method_comment(target.file, target.index, index) {
            for line in javadoc(comment, "  ") {
                p.line(&[&line]);
            }
        }
        p.line(&[
            "  ",
            &output_type,
            " ",
            &method_name,
            "(",
            &input_type,
            " request);",
        ]);
    }

    p.line(&["}"]);

    File {
        name: Some(artifact_path(target.file, target.service, ArtifactKind::Interface)),
        content: Some(p.finish()),
        ..Default::default()
    }
}
