//! PDF text extraction
//!
//! Page text comes from a [`PageExtractor`]; [`TextExtractor`] joins pages in
//! order with a newline after every page, the last one included.

use std::sync::Arc;

use crate::error::{Error, Result};

/// Per-page text source for a page-oriented document format
pub trait PageExtractor: Send + Sync {
    /// Extract the text of every page, in page order.
    ///
    /// Pages without extractable text yield an empty string.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>>;

    /// Extractor name for logging
    fn name(&self) -> &str;
}

/// PDF page extractor backed by lopdf
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfPageExtractor;

impl PageExtractor for LopdfPageExtractor {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        if data.is_empty() {
            return Err(Error::unreadable("document is empty"));
        }

        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::unreadable(format!("Failed to load PDF: {}", e)))?;

        if doc.is_encrypted() {
            return Err(Error::unreadable("PDF is encrypted"));
        }

        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for page_number in pages.keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(text) => texts.push(text.replace('\0', "")),
                Err(e) => {
                    tracing::debug!("No extractable text on page {}: {}", page_number, e);
                    texts.push(String::new());
                }
            }
        }

        Ok(texts)
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}

/// Turns a document byte stream into a single text string
#[derive(Clone)]
pub struct TextExtractor {
    pages: Arc<dyn PageExtractor>,
}

impl TextExtractor {
    /// Create an extractor over the given page source
    pub fn new(pages: Arc<dyn PageExtractor>) -> Self {
        Self { pages }
    }

    /// Extract the full document text
    pub fn extract(&self, data: &[u8]) -> Result<String> {
        let pages = self.pages.extract_pages(data)?;

        let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
        for page in &pages {
            text.push_str(page);
            text.push('\n');
        }

        tracing::debug!(
            "Extracted {} pages ({} chars) with {}",
            pages.len(),
            text.len(),
            self.pages.name()
        );

        Ok(text)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(Arc::new(LopdfPageExtractor))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Page source returning fixed page texts
    pub(crate) struct FixedPages(pub Vec<String>);

    impl PageExtractor for FixedPages {
        fn extract_pages(&self, _data: &[u8]) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    /// Build a small PDF with one text line per page
    pub(crate) fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_newline_after_every_page() {
        let extractor = TextExtractor::new(Arc::new(FixedPages(vec![
            "The cat sat. ".to_string(),
            "The dog ran. ".to_string(),
        ])));

        let text = extractor.extract(b"ignored").unwrap();
        assert_eq!(text, "The cat sat. \nThe dog ran. \n");
    }

    #[test]
    fn test_blank_page_contributes_separator() {
        let extractor = TextExtractor::new(Arc::new(FixedPages(vec![
            "first".to_string(),
            String::new(),
            "third".to_string(),
        ])));

        assert_eq!(extractor.extract(b"ignored").unwrap(), "first\n\nthird\n");
    }

    #[test]
    fn test_garbage_is_unreadable() {
        let extractor = TextExtractor::default();
        let result = extractor.extract(b"definitely not a pdf");
        assert!(matches!(result, Err(Error::UnreadableDocument(_))));
    }

    #[test]
    fn test_empty_bytes_are_unreadable() {
        let result = LopdfPageExtractor.extract_pages(&[]);
        assert!(matches!(result, Err(Error::UnreadableDocument(_))));
    }

    #[test]
    fn test_real_pdf_page_order() {
        let bytes = build_pdf(&["Alpha page", "Beta page"]);
        let pages = LopdfPageExtractor.extract_pages(&bytes).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("Alpha"));
        assert!(pages[1].contains("Beta"));
    }
}
