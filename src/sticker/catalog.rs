//! Sticker templates offered by the picker.

use crate::image::ImageRef;

/// An entry in the sticker picker. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerTemplate {
    pub id: u32,
    pub image: ImageRef,
}

impl StickerTemplate {
    pub fn new(id: u32, image: impl Into<ImageRef>) -> Self {
        Self {
            id,
            image: image.into(),
        }
    }
}

/// Static, ordered list of sticker templates supplied by configuration.
#[derive(Debug, Clone, Default)]
pub struct StickerCatalog {
    templates: Vec<StickerTemplate>,
}

impl StickerCatalog {
    /// Builds a catalog, dropping templates whose id was already used.
    pub fn new(templates: Vec<StickerTemplate>) -> Self {
        let mut unique: Vec<StickerTemplate> = Vec::with_capacity(templates.len());
        for template in templates {
            if unique.iter().any(|t| t.id == template.id) {
                log::warn!("Duplicate sticker id {} in catalog, skipping", template.id);
                continue;
            }
            unique.push(template);
        }
        Self { templates: unique }
    }

    pub fn get(&self, id: u32) -> Option<&StickerTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StickerTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_order_and_skips_duplicate_ids() {
        let catalog = StickerCatalog::new(vec![
            StickerTemplate::new(2, "b.png"),
            StickerTemplate::new(1, "a.png"),
            StickerTemplate::new(2, "c.png"),
        ]);

        let ids: Vec<u32> = catalog.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(catalog.get(2).unwrap().image.as_str(), "b.png");
        assert!(catalog.get(3).is_none());
    }
}
