//! One open form: the values typed so far and the last generated document.

use std::path::{Path, PathBuf};

use crate::error::DocketError;
use crate::export::{PreviewHandle, RenderedDocument};
use crate::font::FontContext;
use crate::model::{FieldSpec, FormValues};
use crate::template::Template;

pub struct FormSession {
    template: Template,
    values: FormValues,
    document: Option<RenderedDocument>,
    fonts: FontContext,
}

impl FormSession {
    /// Open a form with the template's default values.
    pub fn new(template: Template) -> Self {
        let values = template.default_values();
        Self {
            template,
            values,
            document: None,
            fonts: FontContext::new(),
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The inputs to show, in order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.template.fields
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Update one input. Keys outside the schema are rejected.
    ///
    /// An already generated document is kept as is until the next
    /// [`generate`](Self::generate).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), DocketError> {
        if self.template.field(key).is_none() {
            return Err(DocketError::UnknownField {
                template: self.template.id.clone(),
                key: key.to_string(),
            });
        }
        self.values.set(key, value);
        Ok(())
    }

    /// Render the current values, replacing any earlier document.
    pub fn generate(&mut self) -> Result<&RenderedDocument, DocketError> {
        let document = crate::generate_with(&self.template, &self.values, &self.fonts)?;
        Ok(&*self.document.insert(document))
    }

    pub fn document(&self) -> Option<&RenderedDocument> {
        self.document.as_ref()
    }

    pub fn preview(&self) -> Option<PreviewHandle> {
        self.document.as_ref().map(RenderedDocument::preview_handle)
    }

    pub fn can_download(&self) -> bool {
        self.document.is_some()
    }

    /// Save the last generated document into `dir`.
    pub fn download(&self, dir: &Path) -> Result<PathBuf, DocketError> {
        self.document
            .as_ref()
            .ok_or(DocketError::NotRendered)?
            .download(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template;

    fn bail() -> FormSession {
        FormSession::new(template::by_id("bail").unwrap())
    }

    #[test]
    fn test_opens_with_defaults() {
        let session = FormSession::new(template::by_id("affidavit").unwrap());
        assert_eq!(session.values().get("courtName"), "Chennai");
        assert_eq!(session.values().get("advocateName"), "Advocate, Chennai");
        assert_eq!(session.fields().len(), 14);
    }

    #[test]
    fn test_download_disabled_until_generated() {
        let mut session = bail();
        assert!(!session.can_download());
        assert!(session.preview().is_none());
        assert!(matches!(
            session.download(&std::env::temp_dir()),
            Err(DocketError::NotRendered)
        ));

        session.generate().unwrap();
        assert!(session.can_download());
        assert!(session.preview().is_some());
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut session = bail();
        assert!(session.set("ccNumber", "123").is_ok());
        assert!(matches!(
            session.set("courtLocation", "Madurai"),
            Err(DocketError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_regenerate_replaces_document() {
        let mut session = bail();
        session.set("petitionerAccused", "Ravi").unwrap();
        let first = session.generate().unwrap().bytes().to_vec();

        session.set("petitionerAccused", "Ravi Kumar").unwrap();
        assert_eq!(session.document().unwrap().bytes(), first.as_slice());

        let second = session.generate().unwrap().bytes().to_vec();
        assert_ne!(first, second);
        assert_eq!(session.document().unwrap().filename(), "bail_application_form.pdf");
    }
}
