use std::io;

use html_escape::encode_text;

use super::{RenderedBlock, ResultsView, RESULTS_ID};

/// Results view backed by an HTML fragment.
///
/// Keeps the rendered blocks and serializes them with the same markup a
/// browser page uses for its results container. All text coming from the
/// service is escaped.
#[derive(Debug, Default, Clone)]
pub struct HtmlResultsView {
    blocks: Vec<RenderedBlock>,
}

impl HtmlResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    /// Inner HTML of the results container
    pub fn to_html(&self) -> String {
        self.blocks.iter().map(block_html).collect()
    }

    /// The results container including its own element
    pub fn to_document_fragment(&self) -> String {
        format!(r#"<div id="{}">{}</div>"#, RESULTS_ID, self.to_html())
    }
}

fn block_html(block: &RenderedBlock) -> String {
    match block {
        RenderedBlock::Recipe {
            title,
            ingredients,
            similarity,
        } => format!(
            r#"<div class="recipe"><h2>{}</h2><p>{}</p><p>{}</p></div>"#,
            encode_text(title),
            encode_text(ingredients),
            encode_text(similarity)
        ),
        RenderedBlock::Notice(text) => format!("<p>{}</p>", encode_text(text)),
    }
}

impl ResultsView for HtmlResultsView {
    fn clear(&mut self) -> io::Result<()> {
        self.blocks.clear();
        Ok(())
    }

    fn append(&mut self, block: RenderedBlock) -> io::Result<()> {
        self.blocks.push(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::replace_content;

    #[test]
    fn test_notice_markup() {
        let mut view = HtmlResultsView::new();
        replace_content(&mut view, vec![RenderedBlock::notice("No matching recipes found.")])
            .unwrap();
        assert_eq!(view.to_html(), "<p>No matching recipes found.</p>");
    }

    #[test]
    fn test_recipe_markup() {
        let mut view = HtmlResultsView::new();
        view.append(RenderedBlock::Recipe {
            title: "Pancakes".to_string(),
            ingredients: "Ingredients: egg, flour, milk".to_string(),
            similarity: "Similarity: 0.92".to_string(),
        })
        .unwrap();

        assert_eq!(
            view.to_document_fragment(),
            r#"<div id="results"><div class="recipe"><h2>Pancakes</h2><p>Ingredients: egg, flour, milk</p><p>Similarity: 0.92</p></div></div>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut view = HtmlResultsView::new();
        view.append(RenderedBlock::notice("<script>alert(1)</script> & more"))
            .unwrap();
        assert_eq!(
            view.to_html(),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn test_clear_removes_previous_blocks() {
        let mut view = HtmlResultsView::new();
        view.append(RenderedBlock::notice("old")).unwrap();
        replace_content(&mut view, vec![RenderedBlock::notice("new")]).unwrap();
        assert_eq!(view.blocks(), &[RenderedBlock::notice("new")]);
    }
}
