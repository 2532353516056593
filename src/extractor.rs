use select::document::Document;
use select::node::Node;
use select::predicate::{Class, Name, Predicate};

use crate::error::{Field, ScrapError};
use crate::record::Record;

/// Fields looked up inside a single quote container, untrimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuote {
    pub text: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// Markup query mechanism used to locate quote containers and their fields.
///
/// Implementations must look fields up within each container only.
pub trait QuoteParser {
    fn parse_page(&self, markup: &str) -> Vec<RawQuote>;
}

/// [`QuoteParser`] for the quotes.toscrape.com layout:
///
/// ```html
/// <div class="quote">
///   <span class="text">…</span>
///   <span>by <small class="author">…</small></span>
///   <div class="tags"><a class="tag">…</a>…</div>
/// </div>
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectParser;

impl SelectParser {
    fn first_text(container: &Node, pred: impl Predicate) -> Option<String> {
        container.find(pred).next().map(|n| n.text())
    }
}

impl QuoteParser for SelectParser {
    fn parse_page(&self, markup: &str) -> Vec<RawQuote> {
        let document = Document::from(markup);

        document
            .find(Name("div").and(Class("quote")))
            .map(|container| RawQuote {
                text: Self::first_text(&container, Name("span").and(Class("text"))),
                author: Self::first_text(&container, Name("small").and(Class("author"))),
                tags: container
                    .find(Name("a").and(Class("tag")))
                    .map(|tag| tag.text())
                    .collect(),
            })
            .collect()
    }
}

/// Outcome of extracting one page
#[derive(Debug, Default)]
pub struct Extracted {
    /// Number of quote containers found, well-formed or not
    pub containers: usize,
    pub records: Vec<Record>,
    /// One [`ScrapError::MissingField`] per skipped container
    pub skipped: Vec<ScrapError>,
}

pub fn extract<P>(parser: &P, markup: &str, page: u32) -> Extracted
where
    P: QuoteParser + ?Sized,
{
    let raws = parser.parse_page(markup);
    let mut extracted = Extracted {
        containers: raws.len(),
        ..Default::default()
    };

    for (index, raw) in raws.into_iter().enumerate() {
        match to_record(raw, page, index) {
            Ok(record) => extracted.records.push(record),
            Err(e) => extracted.skipped.push(e),
        }
    }

    extracted
}

fn to_record(raw: RawQuote, page: u32, index: usize) -> Result<Record, ScrapError> {
    let missing = |field: Field| ScrapError::MissingField { page, index, field };

    let text = raw.text.ok_or_else(|| missing(Field::Text))?;
    let author = raw.author.ok_or_else(|| missing(Field::Author))?;

    Record::new(&text, &author, raw.tags, page).map_err(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body><div class="container">
  <div class="quote" itemscope>
    <span class="text" itemprop="text">
      “The world as we have created it is a process of our thinking.”
    </span>
    <span>by <small class="author" itemprop="author">Albert Einstein</small></span>
    <div class="tags">
      Tags:
      <a class="tag" href="/tag/change/page/1/">change</a>
      <a class="tag" href="/tag/deep-thoughts/page/1/">deep-thoughts</a>
    </div>
  </div>
  <div class="quote">
    <span class="text">“A day without sunshine is like, you know, night.”</span>
    <span>by <small class="author">Steve Martin</small></span>
    <div class="tags"></div>
  </div>
</div></body></html>
"#;

    #[test]
    fn parses_fields_per_container() {
        let raws = SelectParser.parse_page(PAGE);
        assert_eq!(raws.len(), 2);
        assert_eq!(raws[0].author.as_deref(), Some("Albert Einstein"));
        assert_eq!(raws[0].tags, vec!["change", "deep-thoughts"]);
        assert_eq!(raws[1].author.as_deref(), Some("Steve Martin"));
        assert!(raws[1].tags.is_empty());
    }

    #[test]
    fn trims_and_keeps_order() {
        let extracted = extract(&SelectParser, PAGE, 4);
        assert_eq!(extracted.containers, 2);
        assert!(extracted.skipped.is_empty());

        let first = &extracted.records[0];
        assert_eq!(
            first.text(),
            "“The world as we have created it is a process of our thinking.”"
        );
        assert_eq!(first.page(), 4);
        assert_eq!(extracted.records[1].author(), "Steve Martin");
    }

    #[test]
    fn missing_author_does_not_leak_from_sibling() {
        let page = r#"
<div class="quote"><span class="text">orphan</span><a class="tag">lonely</a></div>
<div class="quote"><span class="text">kept</span><small class="author">Someone</small></div>
"#;
        let extracted = extract(&SelectParser, page, 1);
        assert_eq!(extracted.containers, 2);
        assert_eq!(extracted.records.len(), 1);
        assert_eq!(extracted.records[0].text(), "kept");
        assert!(extracted.records[0].tags().is_empty());
        assert!(matches!(
            &extracted.skipped[..],
            [ScrapError::MissingField {
                page: 1,
                index: 0,
                field: Field::Author
            }]
        ));
    }

    #[test]
    fn blank_text_is_missing() {
        let raw = RawQuote {
            text: Some("   \n ".into()),
            author: Some("x".into()),
            tags: vec![],
        };
        assert!(matches!(
            to_record(raw, 2, 5),
            Err(ScrapError::MissingField {
                field: Field::Text,
                ..
            })
        ));
    }

    #[test]
    fn no_containers() {
        let extracted = extract(&SelectParser, "<html><body>No quotes found!</body></html>", 11);
        assert_eq!(extracted.containers, 0);
        assert!(extracted.records.is_empty());
    }
}
