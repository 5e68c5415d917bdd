use std::path::PathBuf;
use std::sync::Arc;

use usvg::fontdb;

use crate::foundation::error::{StillreelError, StillreelResult};

/// Families tried in order when no font file is given.
pub const DEFAULT_FAMILIES: &[&str] = &["Arial", "DejaVu Sans", "Liberation Sans"];

/// Where caption glyphs come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType/OpenType font file.
    Path(PathBuf),
    /// Search installed fonts: [`DEFAULT_FAMILIES`], then generic sans-serif, then any face.
    #[default]
    System,
}

/// Raw font bytes plus the face index inside them.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
    /// Human-readable origin, for logs.
    pub origin: String,
}

impl FontSource {
    pub fn load(&self) -> StillreelResult<LoadedFont> {
        match self {
            Self::Path(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    StillreelError::font(format!(
                        "failed to read font '{}': {e}",
                        path.display()
                    ))
                })?;
                let mut db = fontdb::Database::new();
                db.load_font_data(bytes.clone());
                if db.is_empty() {
                    return Err(StillreelError::font(format!(
                        "'{}' contains no usable font faces",
                        path.display()
                    )));
                }
                Ok(LoadedFont {
                    bytes: Arc::new(bytes),
                    index: 0,
                    origin: path.display().to_string(),
                })
            }
            Self::System => {
                let mut db = fontdb::Database::new();
                db.load_system_fonts();
                load_from_db(&db)
            }
        }
    }
}

pub(crate) fn load_from_db(db: &fontdb::Database) -> StillreelResult<LoadedFont> {
    let mut families: Vec<fontdb::Family<'_>> = DEFAULT_FAMILIES
        .iter()
        .map(|name| fontdb::Family::Name(*name))
        .collect();
    families.push(fontdb::Family::SansSerif);

    let id = families
        .iter()
        .find_map(|family| {
            db.query(&fontdb::Query {
                families: std::slice::from_ref(family),
                ..Default::default()
            })
        })
        .or_else(|| db.faces().next().map(|face| face.id))
        .ok_or_else(|| StillreelError::font("no installed fonts found; pass a font file"))?;

    let origin = db
        .face(id)
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "system font".to_owned());
    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| StillreelError::font(format!("failed to read font data for '{origin}'")))?;

    tracing::debug!(font = %origin, index, "resolved system font");
    Ok(LoadedFont {
        bytes: Arc::new(bytes),
        index,
        origin,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
