//! # Gist Backend
//!
//! Stores the JSON document as a file inside a private GitHub gist.
//!
//! Configuration (`~/.config/boom/config`):
//!
//! ```toml
//! backend = "gist"
//!
//! [gist]
//! token = "ghp_..."        # required, needs the `gist` scope
//! gist_id = "aa5a315d..."  # written automatically on the first save
//! filename = "boom.json"   # optional
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::cell::RefCell;

use serde_json::{json, Map, Value};
use tracing::debug;

use super::Backend;
use crate::{
    config::ConfigStore,
    constants::{BACKEND_GIST, GIST_API_URL, GIST_DESCRIPTION, GIST_FILENAME, GIST_USER_AGENT},
    error::{BoomError, Result},
};

pub const TOKEN_KEY: &str = "gist.token";
pub const GIST_ID_KEY: &str = "gist.gist_id";
pub const FILENAME_KEY: &str = "gist.filename";
pub const API_URL_KEY: &str = "gist.api_url";

/// GitHub gist backend.
///
/// Without a configured gist id, loading yields an empty dataset and the first
/// save creates the gist. Nothing touches the network until then.
#[derive(Debug, Clone)]
pub struct GistBackend {
    api_url: String,
    token: String,
    filename: String,
    gist_id: RefCell<Option<String>>,
    created: RefCell<Option<String>>,
}

impl GistBackend {
    /// Creates the backend from config. Fails without a token.
    pub fn from_config(config: &mut dyn ConfigStore) -> Result<Box<dyn Backend>> {
        let token = config.get(TOKEN_KEY).filter(|t| !t.is_empty()).ok_or_else(|| {
            BoomError::Config(format!("the gist backend needs `{TOKEN_KEY}` to be set"))
        })?;
        let api_url = config
            .get(API_URL_KEY)
            .unwrap_or_else(|| GIST_API_URL.to_string());
        let filename = config
            .get(FILENAME_KEY)
            .unwrap_or_else(|| GIST_FILENAME.to_string());
        let gist_id = config.get(GIST_ID_KEY).filter(|id| !id.is_empty());

        Ok(Box::new(Self {
            api_url,
            token,
            filename,
            gist_id: RefCell::new(gist_id),
            created: RefCell::new(None),
        }))
    }

    fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    fn gist_url(&self, id: &str) -> String {
        format!("{}/gists/{id}", self.api_base())
    }

    fn create(&self, content: &str) -> Result<String> {
        let url = format!("{}/gists", self.api_base());
        debug!(%url, "creating gist");

        let mut body = envelope(&self.filename, content);
        body["public"] = Value::Bool(false);

        let response: Value = authorized(ureq::post(&url), &self.token)
            .send_json(body)
            .map_err(|e| persistence_failure(&e))?
            .into_json()
            .map_err(|e| persistence_failure(&e))?;

        response
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| BoomError::PersistenceFailure {
                backend: BACKEND_GIST.to_string(),
                message: "GitHub did not return a gist id".to_string(),
            })
    }
}

impl Backend for GistBackend {
    fn name(&self) -> &str {
        BACKEND_GIST
    }

    fn load(&self) -> Result<Vec<u8>> {
        let configured = self.gist_id.borrow().clone();
        let Some(id) = configured else {
            debug!("no gist configured yet, starting empty");
            return Ok(Vec::new());
        };

        let url = self.gist_url(&id);
        debug!(%url, "fetching gist");

        let envelope: Value = authorized(ureq::get(&url), &self.token)
            .call()
            .map_err(|e| load_failure(&e))?
            .into_json()
            .map_err(|e| load_failure(&e))?;

        let content = extract_content(&envelope, &self.filename)?;
        Ok(content.unwrap_or_default().into_bytes())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        let content = std::str::from_utf8(bytes).map_err(|e| persistence_failure(&e))?;

        let configured = self.gist_id.borrow().clone();
        let Some(id) = configured else {
            let id = self.create(content)?;
            *self.gist_id.borrow_mut() = Some(id.clone());
            *self.created.borrow_mut() = Some(id);
            return Ok(());
        };

        let url = self.gist_url(&id);
        debug!(%url, "updating gist");

        authorized(ureq::request("PATCH", &url), &self.token)
            .send_json(envelope(&self.filename, content))
            .map_err(|e| persistence_failure(&e))?;
        Ok(())
    }

    fn take_settings(&self) -> Vec<(&'static str, String)> {
        self.created
            .borrow_mut()
            .take()
            .map(|id| vec![(GIST_ID_KEY, id)])
            .unwrap_or_default()
    }
}

/// Builds the request body wrapping `content` as the named gist file.
pub fn envelope(filename: &str, content: &str) -> Value {
    let mut files = Map::with_capacity(1);
    files.insert(filename.to_string(), json!({ "content": content }));
    json!({
        "description": GIST_DESCRIPTION,
        "files": files,
    })
}

/// Extracts the named file's content from a gist API response.
///
/// A gist without that file yields `None`; a malformed response is corrupt data.
pub fn extract_content(envelope: &Value, filename: &str) -> Result<Option<String>> {
    let files = envelope
        .get("files")
        .and_then(Value::as_object)
        .ok_or_else(|| BoomError::CorruptData {
            source_name: BACKEND_GIST.to_string(),
            message: "response has no files".to_string(),
        })?;

    let Some(file) = files.get(filename) else {
        return Ok(None);
    };

    file.get("content")
        .and_then(Value::as_str)
        .map(|content| Some(content.to_string()))
        .ok_or_else(|| BoomError::CorruptData {
            source_name: BACKEND_GIST.to_string(),
            message: format!("{filename} has no content"),
        })
}

fn authorized(request: ureq::Request, token: &str) -> ureq::Request {
    request
        .set("User-Agent", GIST_USER_AGENT)
        .set("Accept", "application/vnd.github+json")
        .set("Authorization", &format!("token {token}"))
}

fn load_failure(e: &dyn std::fmt::Display) -> BoomError {
    BoomError::LoadFailure {
        backend: BACKEND_GIST.to_string(),
        message: e.to_string(),
    }
}

fn persistence_failure(e: &dyn std::fmt::Display) -> BoomError {
    BoomError::PersistenceFailure {
        backend: BACKEND_GIST.to_string(),
        message: e.to_string(),
    }
}
