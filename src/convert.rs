use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionVersion,
};
use tracing::*;

use crate::{Error, Result};

pub const DEFAULT_SRC: &str = ".output";
pub const DEFAULT_DEST: &str = ".dest";

/// Source and destination of a single conversion run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub src: PathBuf,
    pub dest: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            src: PathBuf::from(DEFAULT_SRC),
            dest: PathBuf::from(DEFAULT_DEST),
        }
    }
}

/// What a completed run did, in processing order
#[derive(Debug, Default)]
pub struct ConvertSummary {
    /// Output files, one per version entry
    pub written: Vec<PathBuf>,
    /// Source files that declared no versions
    pub skipped: Vec<PathBuf>,
}

/// Split every CRD found directly under `opts.src` into one file per version,
/// laid out as `<dest>/<group>/<kind>/<version>.yaml`.
///
/// Stops at the first error. Files written before the failure are left in place.
pub fn convert(opts: &ConvertOptions) -> Result<ConvertSummary> {
    check_source_dir(&opts.src)?;
    let entries = std::fs::read_dir(&opts.src).map_err(Error::io(&opts.src))?;
    std::fs::create_dir_all(&opts.dest).map_err(Error::io(&opts.dest))?;

    let mut summary = ConvertSummary::default();
    for entry in entries {
        let entry = entry.map_err(Error::io(&opts.src))?;
        let path = entry.path();
        if entry.file_type().map_err(Error::io(&path))?.is_dir() {
            debug!("Skipping directory {}", path.display());
            continue;
        }

        let data = std::fs::read(&path).map_err(Error::io(&path))?;
        let crd = decode_crd(&data).map_err(|source| Error::DecodeError {
            path: path.clone(),
            source,
        })?;
        debug!(
            "Decoded CRD {}/{} from {} with {} version(s)",
            crd.spec.group,
            crd.spec.names.kind,
            path.display(),
            crd.spec.versions.len()
        );
        if crd.spec.versions.is_empty() {
            info!("No versions declared in {}, skipping", path.display());
            summary.skipped.push(path);
            continue;
        }

        let current_dir = kind_dir(&opts.dest, &crd);
        std::fs::create_dir_all(&current_dir).map_err(Error::io(&current_dir))?;

        for (version, single) in crd.spec.versions.iter().zip(split_versions(&crd)) {
            let contents = encode_crd(&single).map_err(|source| Error::EncodeError {
                gvk: gvk_string(&crd, version),
                source,
            })?;
            let current_file = version_path(&opts.dest, &crd, version);
            std::fs::write(&current_file, contents).map_err(Error::io(&current_file))?;
            info!("Wrote {}", current_file.display());
            summary.written.push(current_file);
        }
    }
    Ok(summary)
}

fn check_source_dir(src: &Path) -> Result<()> {
    match std::fs::metadata(src) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory(src.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::PathNotFound(src.to_path_buf())),
        Err(source) => Err(Error::IoError {
            path: src.to_path_buf(),
            source,
        }),
    }
}

/// Decode a CRD document. JSON input is accepted as YAML.
pub fn decode_crd(data: &[u8]) -> Result<CustomResourceDefinition, serde_yaml::Error> {
    serde_yaml::from_slice(data)
}

pub fn encode_crd(crd: &CustomResourceDefinition) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(crd)
}

/// One independent copy of `crd` per version entry, each narrowed to that
/// single entry, in declaration order.
pub fn split_versions(crd: &CustomResourceDefinition) -> Vec<CustomResourceDefinition> {
    crd.spec
        .versions
        .iter()
        .map(|version| {
            let mut copy = crd.clone();
            copy.spec.versions = vec![version.clone()];
            copy
        })
        .collect()
}

pub fn kind_dir(dest: &Path, crd: &CustomResourceDefinition) -> PathBuf {
    dest.join(&crd.spec.group).join(&crd.spec.names.kind)
}

pub fn version_path(
    dest: &Path,
    crd: &CustomResourceDefinition,
    version: &CustomResourceDefinitionVersion,
) -> PathBuf {
    kind_dir(dest, crd).join(format!("{}.yaml", version.name))
}

fn gvk_string(crd: &CustomResourceDefinition, version: &CustomResourceDefinitionVersion) -> String {
    format!(
        "{}/{}, Kind={}",
        crd.spec.group, version.name, crd.spec.names.kind
    )
}
