use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Document, DocumentKind, Rendered};
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;
use pulldown_cmark::{html, Options, Parser};

/// Read a document. With `render`, Markdown documents come back as HTML and
/// text documents verbatim.
pub fn run<B: StorageBackend>(store: &DocStore<B>, name: &str, render: bool) -> Result<CmdResult> {
    let document = store.get(name)?;

    let mut result = CmdResult::default();
    if render {
        result.rendered = Some(render_document(&document));
    }
    Ok(result.with_affected_documents(vec![document]))
}

pub fn render_document(document: &Document) -> Rendered {
    let text = document.text();
    match document.kind {
        DocumentKind::Markdown => Rendered::Html(markdown_to_html(&text)),
        DocumentKind::Text => Rendered::Plain(text),
    }
}

fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::QuireError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn reads_content_without_rendering() {
        let store = DocStore::with_backend(MemBackend::new());
        create::run(&store, "history.txt", b"This is history").unwrap();

        let result = run(&store, "history.txt", false).unwrap();
        assert_eq!(result.affected_documents[0].text(), "This is history");
        assert!(result.rendered.is_none());
    }

    #[test]
    fn markdown_renders_to_html() {
        let store = DocStore::with_backend(MemBackend::new());
        create::run(&store, "about.md", b"# Ruby is...").unwrap();

        let result = run(&store, "about.md", true).unwrap();
        assert_eq!(
            result.rendered,
            Some(Rendered::Html("<h1>Ruby is...</h1>\n".to_string()))
        );
    }

    #[test]
    fn text_renders_verbatim() {
        let store = DocStore::with_backend(MemBackend::new());
        create::run(&store, "plain.txt", b"# not a heading").unwrap();

        let result = run(&store, "plain.txt", true).unwrap();
        assert_eq!(
            result.rendered,
            Some(Rendered::Plain("# not a heading".to_string()))
        );
    }

    #[test]
    fn missing_document_is_not_found() {
        let store = DocStore::with_backend(MemBackend::new());
        assert!(matches!(
            run(&store, "notafile.ext", false),
            Err(QuireError::NotFound(_))
        ));
    }
}
