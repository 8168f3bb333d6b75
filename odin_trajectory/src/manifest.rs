/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! loading of bundled missions, i.e. datasets that are listed in a JSON manifest and shipped with the app.
//!
//! The manifest is an array of [`MissionManifestEntry`] records. Each entry refers to a structured telemetry
//! document that is obtained through a [`DocumentSource`], which abstracts the transport (we only provide a
//! local directory based one). Manifest values override the ones of the fetched document.

use std::path::{Path,PathBuf};
use serde::{Serialize,Deserialize};

use odin_common::{debug, info, warn, fs};
use crate::dataset::{Dataset,DatasetSource,DatasetStyle};
use crate::errors::{OdinTrajectoryError,Result,manifest_error};
use crate::import::parse_json;
use crate::validate::validate_dataset;

pub const DEFAULT_MANIFEST: &str = "missions.json";

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct MissionManifestEntry {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub description: Option<String>,

    /// reference of the telemetry document, relative to the source root
    pub file: String,

    #[serde(default, skip_serializing_if="odin_common::is_none")]
    pub color: Option<String>,
}

/// the transport for manifests and telemetry documents
pub trait DocumentSource {
    fn fetch (&self, reference: &str)->Result<String>;
}

/// a document source that reads from a local directory
#[derive(Debug,Clone)]
pub struct DirDocumentSource {
    root: PathBuf,
}

impl DirDocumentSource {
    pub fn new (root: impl AsRef<Path>)->Self {
        DirDocumentSource { root: root.as_ref().to_path_buf() }
    }

    pub fn root (&self)->&Path { &self.root }
}

impl DocumentSource for DirDocumentSource {
    fn fetch (&self, reference: &str)->Result<String> {
        let path = fs::resolve_in_dir( &self.root, reference)
            .map_err( |e| manifest_error!("invalid reference {}: {}", reference, e))?;
        fs::filepath_contents_as_string( &path)
            .map_err( |e| manifest_error!("failed to fetch {}: {}", path.display(), e))
    }
}

pub fn parse_manifest (text: &str)->Result<Vec<MissionManifestEntry>> {
    serde_json::from_str( text).map_err( |e| manifest_error!("invalid manifest: {}", e))
}

/// fetch and parse the document of a manifest entry, then apply the entry values on top
pub fn load_mission (source: &impl DocumentSource, entry: &MissionManifestEntry)->Result<Dataset> {
    let text = source.fetch( &entry.file)?;
    let doc = parse_json( &text)?;

    let mut style = doc.style.clone().unwrap_or_default();
    if entry.color.is_some() { style.color = entry.color.clone() }

    let mut dataset = doc.into_dataset( DatasetSource::Bundled, &entry.name);
    dataset.id = entry.id.clone();
    dataset.name = entry.name.clone();
    if entry.description.is_some() { dataset.description = entry.description.clone() }
    dataset.style = if style == DatasetStyle::default() { None } else { Some(style) };

    validate_dataset( &dataset)?;
    Ok(dataset)
}

/// load all missions listed in the `manifest` document of `source`. Entries that fail to load are
/// skipped, a manifest that can't be fetched or parsed is an error
pub fn load_bundled_missions (source: &impl DocumentSource, manifest: &str)->Result<Vec<Dataset>> {
    let entries = parse_manifest( &source.fetch( manifest)?)?;
    let mut datasets = Vec::with_capacity( entries.len());

    for entry in &entries {
        match load_mission( source, entry) {
            Ok(ds) => {
                debug!("loaded bundled mission '{}' ({} samples)", ds.id, ds.samples.len());
                datasets.push(ds)
            }
            Err(e) => warn!("skipping bundled mission '{}': {}", entry.id, e)
        }
    }

    info!("loaded {} of {} bundled missions", datasets.len(), entries.len());
    Ok(datasets)
}
