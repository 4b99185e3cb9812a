use serde_json::Value;
use thiserror::Error;
use tekton_protocol::{JsonPatchOp, PatchOp};

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("patch path must start with '/': {0}")]
    BadPath(String),

    #[error("path not found: {0}")]
    NotFound(String),

    #[error("invalid array index '{index}' in path {path}")]
    BadIndex { path: String, index: String },
}

fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Apply `add` and `replace` operations (the only kinds the autofix
/// machinery emits) to a document in place. Paths are RFC 6901 pointers.
pub fn apply_patches(document: &mut Value, patches: &[JsonPatchOp]) -> Result<(), PatchError> {
    for patch in patches {
        apply_one(document, patch)?;
    }
    Ok(())
}

fn apply_one(document: &mut Value, patch: &JsonPatchOp) -> Result<(), PatchError> {
    let Some(rest) = patch.path.strip_prefix('/') else {
        return Err(PatchError::BadPath(patch.path.clone()));
    };

    let tokens: Vec<String> = rest.split('/').map(unescape).collect();
    let (last, parents) = tokens
        .split_last()
        .ok_or_else(|| PatchError::BadPath(patch.path.clone()))?;

    let mut target = document;
    for token in parents {
        target = match target {
            Value::Object(map) => map
                .get_mut(token)
                .ok_or_else(|| PatchError::NotFound(patch.path.clone()))?,
            Value::Array(items) => {
                let index: usize = token.parse().map_err(|_| PatchError::BadIndex {
                    path: patch.path.clone(),
                    index: token.clone(),
                })?;
                items
                    .get_mut(index)
                    .ok_or_else(|| PatchError::NotFound(patch.path.clone()))?
            }
            _ => return Err(PatchError::NotFound(patch.path.clone())),
        };
    }

    match target {
        Value::Object(map) => {
            match patch.op {
                PatchOp::Add => {
                    map.insert(last.clone(), patch.value.clone());
                }
                PatchOp::Replace => {
                    if !map.contains_key(last) {
                        return Err(PatchError::NotFound(patch.path.clone()));
                    }
                    map.insert(last.clone(), patch.value.clone());
                }
            }
            Ok(())
        }
        Value::Array(items) => {
            if patch.op == PatchOp::Add && last.as_str() == "-" {
                items.push(patch.value.clone());
                return Ok(());
            }
            let index: usize = last.parse().map_err(|_| PatchError::BadIndex {
                path: patch.path.clone(),
                index: last.clone(),
            })?;
            match patch.op {
                PatchOp::Add => {
                    if index > items.len() {
                        return Err(PatchError::NotFound(patch.path.clone()));
                    }
                    items.insert(index, patch.value.clone());
                }
                PatchOp::Replace => {
                    let slot = items
                        .get_mut(index)
                        .ok_or_else(|| PatchError::NotFound(patch.path.clone()))?;
                    *slot = patch.value.clone();
                }
            }
            Ok(())
        }
        _ => Err(PatchError::NotFound(patch.path.clone())),
    }
}
