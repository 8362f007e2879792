//! Java and Twirp naming for protobuf services
//!
//! Every identifier that ends up in generated code or on the wire is derived
//! here. Two casing transforms exist for a method name and they are not
//! interchangeable: [`method_identifier`] is the Java method name, while
//! [`wire_path_segment`] is the last URL component the Twirp server routes on.

use prost_types::{
    DescriptorProto, FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto,
};

/// Fixed root of every Twirp route
pub const TWIRP_PREFIX: &str = "/twirp/";

/// Suffix that distinguishes a client class from its interface
pub const CLIENT_SUFFIX: &str = "Client";

/// Suffix appended to a derived outer class name that clashes with a type
const OUTER_CLASS_SUFFIX: &str = "OuterClass";

/// Source file extension of generated artifacts
const JAVA_EXTENSION: &str = ".java";

/// Java reserved words and literals that cannot name a method
const JAVA_RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// The two artifacts generated for each service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The service contract
    Interface,
    /// The JAX-RS implementation of the contract
    Client,
}

impl ArtifactKind {
    /// Java class name of this artifact for a service
    pub fn class_name(&self, service: &ServiceDescriptorProto) -> String {
        match self {
            ArtifactKind::Interface => interface_name(service),
            ArtifactKind::Client => client_class_name(service),
        }
    }
}

/// Convert a protobuf name to upper camel case
///
/// Underscores followed by a lowercase letter are dropped and the letter is
/// capitalized, a leading underscore becomes `X`, and runs of lowercase
/// letters after any other character are kept as written. `MakeHAT` stays
/// `MakeHAT`; `make_hat` becomes `MakeHat`.
pub fn camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 1);
    let mut i = 0;

    if chars.first() == Some(&'_') {
        out.push('X');
        i = 1;
    }

    while i < chars.len() {
        let c = chars[i];
        if c == '_' && chars.get(i + 1).is_some_and(char::is_ascii_lowercase) {
            i += 1;
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
            i += 1;
            continue;
        }

        out.push(c.to_ascii_uppercase());
        while let Some(next) = chars.get(i + 1).filter(|n| n.is_ascii_lowercase()) {
            out.push(*next);
            i += 1;
        }
        i += 1;
    }

    out
}

/// Convert a protobuf name to lower camel case
///
/// Same as [`camel_case`] with the first character lowercased.
pub fn lower_camel_case(name: &str) -> String {
    let upper = camel_case(name);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => upper,
    }
}

/// Java method name for an RPC method
///
/// Names that collide with a Java keyword get a trailing underscore.
pub fn method_identifier(method: &MethodDescriptorProto) -> String {
    let ident = lower_camel_case(method.name());
    if JAVA_RESERVED.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else {
        ident
    }
}

/// URL path segment for an RPC method, e.g. `MakeHat`
pub fn wire_path_segment(method: &MethodDescriptorProto) -> String {
    camel_case(method.name())
}

/// Java package for a file: `java_package` if set, otherwise the proto package
pub fn java_package(file: &FileDescriptorProto) -> &str {
    file.options
        .as_ref()
        .map(|opts| opts.java_package())
        .filter(|pkg| !pkg.is_empty())
        .unwrap_or_else(|| file.package())
}

/// Whether each top-level message of the file gets its own Java class
pub fn java_multiple_files(file: &FileDescriptorProto) -> bool {
    file.options
        .as_ref()
        .is_some_and(|opts| opts.java_multiple_files())
}

/// Name of the wrapper class protobuf-java generates for a file
///
/// `java_outer_classname` wins when set. Otherwise the file's base name is
/// camel cased (`hat_service.proto` -> `HatService`), and `OuterClass` is
/// appended if that name is already taken by a type declared in the file.
pub fn outer_class_name(file: &FileDescriptorProto) -> String {
    if let Some(explicit) = file
        .options
        .as_ref()
        .map(|opts| opts.java_outer_classname())
        .filter(|name| !name.is_empty())
    {
        return explicit.to_string();
    }

    let base = file.name().rsplit('/').next().unwrap_or_default();
    let base = base
        .strip_suffix(".protodevel")
        .or_else(|| base.strip_suffix(".proto"))
        .unwrap_or(base);
    let derived = file_class_name(base);

    if declares_type_named(file, &derived) {
        format!("{}{}", derived, OUTER_CLASS_SUFFIX)
    } else {
        derived
    }
}

/// protoc's underscores-to-camel-case rule for file names
fn file_class_name(base: &str) -> String {
    let mut out = String::with_capacity(base.len());
    let mut cap_next = true;

    for c in base.chars() {
        if c.is_ascii_lowercase() {
            out.push(if cap_next { c.to_ascii_uppercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_uppercase() {
            out.push(c);
            cap_next = false;
        } else if c.is_ascii_digit() {
            out.push(c);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }

    out
}

fn declares_type_named(file: &FileDescriptorProto, name: &str) -> bool {
    file.enum_type.iter().any(|e| e.name() == name)
        || file.service.iter().any(|s| s.name() == name)
        || file.message_type.iter().any(|m| message_declares(m, name))
}

fn message_declares(message: &DescriptorProto, name: &str) -> bool {
    message.name() == name
        || message.enum_type.iter().any(|e| e.name() == name)
        || message.nested_type.iter().any(|m| message_declares(m, name))
}

/// Join non-empty segments of a dotted Java name
pub fn qualify(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}

/// Name of the generated service interface
pub fn interface_name(service: &ServiceDescriptorProto) -> String {
    camel_case(service.name())
}

/// Name of the generated client class
pub fn client_class_name(service: &ServiceDescriptorProto) -> String {
    format!("{}{}", interface_name(service), CLIENT_SUFFIX)
}

/// Service routing name, e.g. `happy.path.Haberdasher`
///
/// Uses the proto package, never `java_package`: the server routes on it.
pub fn service_wire_path(file: &FileDescriptorProto, service: &ServiceDescriptorProto) -> String {
    qualify(&[file.package(), &camel_case(service.name())])
}

/// Base path of every request to a service, e.g. `/twirp/happy.path.Haberdasher`
pub fn service_base_path(file: &FileDescriptorProto, service: &ServiceDescriptorProto) -> String {
    format!("{}{}", TWIRP_PREFIX, service_wire_path(file, service))
}

/// Full request path of a method, e.g. `/twirp/happy.path.Haberdasher/MakeHat`
pub fn request_path(
    file: &FileDescriptorProto,
    service: &ServiceDescriptorProto,
    method: &MethodDescriptorProto,
) -> String {
    format!(
        "{}/{}",
        service_base_path(file, service),
        wire_path_segment(method)
    )
}

/// Output path of a generated artifact, e.g. `com/example/Haberdasher.java`
pub fn artifact_path(
    file: &FileDescriptorProto,
    service: &ServiceDescriptorProto,
    kind: ArtifactKind,
) -> String {
    let class = kind.class_name(service);
    let pkg = java_package(file);
    if pkg.is_empty() {
        format!("{}{}", class, JAVA_EXTENSION)
    } else {
        format!("{}/{}{}", pkg.replace('.', "/"), class, JAVA_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::{EnumDescriptorProto, FileOptions};

    fn method(name: &str) -> MethodDescriptorProto {
        MethodDescriptorProto {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn service(name: &str) -> ServiceDescriptorProto {
        ServiceDescriptorProto {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn file(name: &str, package: &str) -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some(name.to_string()),
            package: Some(package.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("MakeHat"), "MakeHat");
        assert_eq!(camel_case("make_hat"), "MakeHat");
        assert_eq!(camel_case("makeHat"), "MakeHat");
        assert_eq!(camel_case("MakeHAT"), "MakeHAT");
        assert_eq!(camel_case("_hidden"), "XHidden");
        assert_eq!(camel_case("get_v2_thing"), "GetV2Thing");
        assert_eq!(camel_case("foo__bar"), "Foo_Bar");
        assert_eq!(camel_case("Make_Hat"), "Make_Hat");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_lower_camel_case() {
        assert_eq!(lower_camel_case("MakeHat"), "makeHat");
        assert_eq!(lower_camel_case("make_hat"), "makeHat");
        assert_eq!(lower_camel_case("HTTPGet"), "hTTPGet");
        assert_eq!(lower_camel_case(""), "");
    }

    #[test]
    fn test_method_identifier_and_wire_segment_diverge() {
        let m = method("MakeHat");
        assert_eq!(method_identifier(&m), "makeHat");
        assert_eq!(wire_path_segment(&m), "MakeHat");

        let m = method("make_hat");
        assert_eq!(method_identifier(&m), "makeHat");
        assert_eq!(wire_path_segment(&m), "MakeHat");

        let m = method("makeHat");
        assert_eq!(method_identifier(&m), "makeHat");
        assert_eq!(wire_path_segment(&m), "MakeHat");
    }

    #[test]
    fn test_method_identifier_escapes_keywords() {
        assert_eq!(method_identifier(&method("New")), "new_");
        assert_eq!(method_identifier(&method("Import")), "import_");
        assert_eq!(wire_path_segment(&method("New")), "New");
        assert_eq!(method_identifier(&method("Newer")), "newer");
    }

    #[test]
    fn test_java_package() {
        let mut f = file("hat.proto", "happy.path");
        assert_eq!(java_package(&f), "happy.path");

        f.options = Some(FileOptions {
            java_package: Some("com.example.hats".to_string()),
            ..Default::default()
        });
        assert_eq!(java_package(&f), "com.example.hats");

        f.options = Some(FileOptions {
            java_package: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(java_package(&f), "happy.path");
    }

    #[test]
    fn test_outer_class_name() {
        assert_eq!(outer_class_name(&file("rpc/hat_service.proto", "x")), "HatService");
        assert_eq!(outer_class_name(&file("v1-api.proto", "x")), "V1Api");
        assert_eq!(outer_class_name(&file("foo2bar.proto", "x")), "Foo2Bar");

        let explicit = FileDescriptorProto {
            options: Some(FileOptions {
                java_outer_classname: Some("Hats".to_string()),
                ..Default::default()
            }),
            ..file("hat.proto", "x")
        };
        assert_eq!(outer_class_name(&explicit), "Hats");
    }

    #[test]
    fn test_outer_class_name_conflicts() {
        let with_message = FileDescriptorProto {
            message_type: vec![DescriptorProto {
                name: Some("Hat".to_string()),
                ..Default::default()
            }],
            ..file("hat.proto", "x")
        };
        assert_eq!(outer_class_name(&with_message), "HatOuterClass");

        let with_nested_enum = FileDescriptorProto {
            message_type: vec![DescriptorProto {
                name: Some("Size".to_string()),
                enum_type: vec![EnumDescriptorProto {
                    name: Some("Hat".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..file("hat.proto", "x")
        };
        assert_eq!(outer_class_name(&with_nested_enum), "HatOuterClass");

        let with_service = FileDescriptorProto {
            service: vec![service("Haberdasher")],
            ..file("haberdasher.proto", "x")
        };
        assert_eq!(outer_class_name(&with_service), "HaberdasherOuterClass");
    }

    #[test]
    fn test_class_names() {
        let s = service("Haberdasher");
        assert_eq!(interface_name(&s), "Haberdasher");
        assert_eq!(client_class_name(&s), "HaberdasherClient");
        assert_eq!(interface_name(&service("hat_shop")), "HatShop");
        assert_eq!(ArtifactKind::Client.class_name(&s), "HaberdasherClient");
    }

    #[test]
    fn test_service_wire_path() {
        let f = file("hat.proto", "happy.path");
        let s = service("Haberdasher");
        assert_eq!(service_wire_path(&f, &s), "happy.path.Haberdasher");
        assert_eq!(service_base_path(&f, &s), "/twirp/happy.path.Haberdasher");
        assert_eq!(
            request_path(&f, &s, &method("MakeHat")),
            "/twirp/happy.path.Haberdasher/MakeHat"
        );
    }

    #[test]
    fn test_service_wire_path_ignores_java_package() {
        let f = FileDescriptorProto {
            options: Some(FileOptions {
                java_package: Some("com.example".to_string()),
                ..Default::default()
            }),
            ..file("hat.proto", "happy.path")
        };
        assert_eq!(service_wire_path(&f, &service("Haberdasher")), "happy.path.Haberdasher");
    }

    #[test]
    fn test_service_wire_path_without_package() {
        let f = FileDescriptorProto {
            name: Some("hat.proto".to_string()),
            ..Default::default()
        };
        assert_eq!(service_wire_path(&f, &service("Haberdasher")), "Haberdasher");
        assert_eq!(
            request_path(&f, &service("Haberdasher"), &method("make_hat")),
            "/twirp/Haberdasher/MakeHat"
        );
    }

    #[test]
    fn test_artifact_path() {
        let f = file("hat.proto", "happy.path");
        let s = service("Haberdasher");
        assert_eq!(
            artifact_path(&f, &s, ArtifactKind::Interface),
            "happy/path/Haberdasher.java"
        );
        assert_eq!(
            artifact_path(&f, &s, ArtifactKind::Client),
            "happy/path/HaberdasherClient.java"
        );

        let no_pkg = FileDescriptorProto::default();
        assert_eq!(
            artifact_path(&no_pkg, &s, ArtifactKind::Interface),
            "Haberdasher.java"
        );
    }

    #[test]
    fn test_artifact_path_collisions() {
        let f = file("hat.proto", "happy.path");
        assert_ne!(
            artifact_path(&f, &service("Haberdasher"), ArtifactKind::Interface),
            artifact_path(&f, &service("Milliner"), ArtifactKind::Interface)
        );
        // derived names collide, so the paths do too
        assert_eq!(
            artifact_path(&f, &service("hat_shop"), ArtifactKind::Interface),
            artifact_path(&f, &service("HatShop"), ArtifactKind::Interface)
        );
        assert_eq!(
            artifact_path(&f, &service("Hat"), ArtifactKind::Client),
            artifact_path(&f, &service("HatClient"), ArtifactKind::Interface)
        );
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify(&["com.example", "Outer", "Hat"]), "com.example.Outer.Hat");
        assert_eq!(qualify(&["", "Hat"]), "Hat");
        assert_eq!(qualify(&[]), "");
    }
}
