//! JAX-RS client generation
//!
//! The client implements the service interface by POSTing each request to
//! `/twirp/<package>.<Service>/<Method>` with a protobuf body and parsing the
//! protobuf response. Response parse failures surface as `RuntimeException`;
//! transport failures come straight from JAX-RS.

use super::printer::Printer;
use super::{write_preamble, ServiceTarget, CONTENT_TYPE};
use crate::names::{
    artifact_path, client_class_name, interface_name, java_package, method_identifier, qualify,
    service_base_path, wire_path_segment, ArtifactKind,
};
use prost_types::compiler::code_generator_response::File;

/// Imports required by the client body
const IMPORTS: &[&str] = &[
    "java.io.InputStream",
    "java.util.function.Function",
    "javax.ws.rs.client.Entity",
    "javax.ws.rs.client.WebTarget",
    "javax.ws.rs.core.Response",
    "javax.ws.rs.core.StreamingOutput",
    "com.google.protobuf.MessageLite",
];

/// Generate the JAX-RS client class for a service
pub fn generate(target: &ServiceTarget<'_>) -> File {
    let mut p = Printer::new();
    write_preamble(&mut p, target.file);

    for import in IMPORTS {
        p.line(&["import ", *import, ";"]);
    }
    p.blank();

    let class = client_class_name(target.service);
    let interface = qualify(&[java_package(target.file), &interface_name(target.service)]);
    let base_path = service_base_path(target.file, target.service);

    p.line(&["public class ", &class, " implements ", &interface, " {"]);
    p.line(&["  private static final String PATH = \"", &base_path, "\";"]);
    p.line(&["  private final WebTarget target;"]);
    p.blank();
    p.line(&["  public ", &class, "(WebTarget target) {"]);
    p.line(&["    this.target = target;"]);
    p.line(&["  }"]);
    p.blank();
    write_helpers(&mut p);

    for method in &target.service.method {
        let output_type = target.output_type(method);
        let input_type = target.input_type(method);
        let method_name = method_identifier(method);
        let segment = wire_path_segment(method);

        p.blank();
        p.line(&["  @Override"]);
        p.line(&[
            "  public ",
            &output_type,
            " ",
            &method_name,
            "(",
            &input_type,
            " request) {",
        ]);
        p.line(&["    Function<InputStream, ", &output_type, "> parser ="]);
        p.line(&[
            "        (input) -> _parseSafely(input, ",
            &output_type,
            "::parseFrom);",
        ]);
        p.line(&["    return _call(PATH + \"/", &segment, "\", request, parser);"]);
        p.line(&["  }"]);
    }

    p.line(&["}"]);

    File {
        name: Some(artifact_path(target.file, target.service, ArtifactKind::Client)),
        content: Some(p.finish()),
        ..Default::default()
    }
}

/// Private helpers: checked-exception wrapping and the unary call itself
fn write_helpers(p: &mut Printer) {
    p.line(&["  private <T> T _parseSafely(InputStream input, FunctionE<InputStream, T> fn) {"]);
    p.line(&["    try {"]);
    p.line(&["      return fn.apply(input);"]);
    p.line(&["    } catch (Exception e) {"]);
    p.line(&["      throw new RuntimeException(e);"]);
    p.line(&["    }"]);
    p.line(&["  }"]);
    p.blank();
    p.line(&["  @FunctionalInterface"]);
    p.line(&["  interface FunctionE<A, B> {"]);
    p.line(&["    B apply(A input) throws Exception;"]);
    p.line(&["  }"]);
    p.blank();
    p.line(&["  private <R> R _call(String path, MessageLite request, Function<InputStream, R> parser) {"]);
    p.line(&["    Response response = target.path(path)"]);
    p.line(&["        .request(\"", CONTENT_TYPE, "\")"]);
    p.line(&[
        "        .post(Entity.entity((StreamingOutput) request::writeTo, \"",
        CONTENT_TYPE,
        "\"));",
    ]);
    p.line(&["    InputStream body = response.readEntity(InputStream.class);"]);
    p.line(&["    return parser.apply(body);"]);
    p.line(&["  }"]);
}
