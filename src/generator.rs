//! Request orchestration
//!
//! Selects the files protoc asked for and emits, for each of their services,
//! the interface followed by the client. Artifacts come out in request file
//! order, then service declaration order.

use crate::codegen::{generate_service, ServiceTarget};
use crate::names::ArtifactKind;
use crate::options::Options;
use crate::types::TypeResolver;
use crate::GeneratorError;
use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorProto;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Decode a CodeGeneratorRequest and run generation on it
pub fn generate_from_bytes(bytes: &[u8]) -> Result<CodeGeneratorResponse, GeneratorError> {
    let request = CodeGeneratorRequest::decode(bytes)
        .map_err(|e| GeneratorError::DecodeError(e.to_string()))?;
    generate(request)
}

/// Generate an interface and a client for every service of every requested file
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    let options = Options::parse(request.parameter())?;
    let types = TypeResolver::new(&request.proto_file);
    debug!(types = types.len(), "indexed message types");

    let mut files = Vec::new();
    let mut claimed = PathClaims::default();

    for file in select_files(&request, &options)? {
        debug!(file = file.name(), services = file.service.len(), "generating");

        for target in ServiceTarget::all(file, &types) {
            let [interface, client] = generate_service(&target);
            let pair = [
                (ArtifactKind::Interface, interface),
                (ArtifactKind::Client, client),
            ];
            for (kind, artifact) in pair {
                claimed.claim(&artifact, &target, kind, &options)?;
                debug!(path = artifact.name(), "generated");
                files.push(artifact);
            }
        }
    }

    Ok(CodeGeneratorResponse {
        file: files,
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    })
}

/// Descriptors for `file_to_generate`, in the order requested
///
/// Every descriptor whose name matches is returned, so duplicate names in the
/// request yield duplicate generation. A name without a descriptor is skipped
/// with a warning unless `strict_inputs` is set.
pub fn select_files<'a>(
    request: &'a CodeGeneratorRequest,
    options: &Options,
) -> Result<Vec<&'a FileDescriptorProto>, GeneratorError> {
    let mut selected = Vec::new();

    for name in &request.file_to_generate {
        let before = selected.len();
        selected.extend(request.proto_file.iter().filter(|f| f.name() == name.as_str()));

        if selected.len() == before {
            if options.strict_inputs {
                return Err(GeneratorError::MissingInput(name.clone()));
            }
            warn!(file = %name, "requested file not present in request, skipping");
        }
    }

    Ok(selected)
}

/// Output paths already taken, with the artifact that took them
#[derive(Debug, Default)]
struct PathClaims {
    owners: HashMap<String, String>,
}

impl PathClaims {
    /// Record an artifact's path; a repeat is a warning or, with
    /// `deny_collisions`, an error
    fn claim(
        &mut self,
        artifact: &File,
        target: &ServiceTarget<'_>,
        kind: ArtifactKind,
        options: &Options,
    ) -> Result<(), GeneratorError> {
        let path = artifact.name().to_string();
        let origin = format!("{} ({:?})", target.origin(), kind);

        if let Some(first) = self.owners.insert(path.clone(), origin.clone()) {
            if options.deny_collisions {
                return Err(GeneratorError::PathCollision {
                    path,
                    first,
                    second: origin,
                });
            }
            warn!(%path, %first, second = %origin, "generated path written twice, last one wins");
        }

        Ok(())
    }
}
