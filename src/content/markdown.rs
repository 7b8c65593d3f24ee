//! Markdown rendering with syntax highlighting
//!
//! Post bodies are rendered to an HTML fragment that is embedded directly
//! into page markup. Raw HTML in the source is escaped rather than passed
//! through, links with script-capable schemes are neutralized, and bare
//! URLs in running text become links.

use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::SiteConfig;

/// URL schemes that are never emitted as link or image targets
const UNSAFE_SCHEMES: [&str; 4] = ["javascript:", "vbscript:", "file:", "data:"];

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
    breaks: bool,
    linkify: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", true, true)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, highlight: bool, breaks: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            highlight,
            breaks,
            linkify: true,
        }
    }

    /// Turn bare URLs in text into links
    pub fn linkify(mut self, enable: bool) -> Self {
        self.linkify = enable;
        self
    }

    /// Create from the site's markdown and highlight settings
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::with_options(
            &config.highlight.theme,
            config.highlight.enable,
            config.markdown.breaks,
        )
        .linkify(config.markdown.linkify)
    }

    /// Render markdown to an HTML fragment
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = TextMergeStream::new(Parser::new_ext(markdown, options));

        let mut events: Vec<Event> = Vec::new();
        // Nesting depth of links and images, whose text is never linkified
        let mut link_depth = 0usize;
        // Some(lang) while inside a code block
        let mut code_block: Option<Option<String>> = None;
        let mut code = String::new();

        for event in parser {
            if code_block.is_some() {
                match event {
                    Event::Text(text) => code.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        let lang = code_block.take().flatten();
                        let html = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(html)));
                        code.clear();
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block = Some(match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.split_whitespace().next().unwrap_or("");
                            (!lang.is_empty()).then(|| lang.to_string())
                        }
                        CodeBlockKind::Indented => None,
                    });
                }
                // Raw HTML is shown as text, never interpreted
                Event::Start(Tag::HtmlBlock) => events.push(Event::Start(Tag::Paragraph)),
                Event::End(TagEnd::HtmlBlock) => events.push(Event::End(TagEnd::Paragraph)),
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::SoftBreak if self.breaks => events.push(Event::HardBreak),
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    link_depth += 1;
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    link_depth += 1;
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::End(end @ (TagEnd::Link | TagEnd::Image)) => {
                    link_depth = link_depth.saturating_sub(1);
                    events.push(Event::End(end));
                }
                Event::Text(text) if self.linkify && link_depth == 0 => {
                    push_linkified(&mut events, text);
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let label = lang.unwrap_or("text");
        let plain = || {
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                html_escape(label),
                html_escape(code)
            )
        };

        if !self.highlight {
            return plain();
        }

        let syntax = lang.and_then(|l| {
            self.syntax_set
                .find_syntax_by_token(l)
                .or_else(|| self.syntax_set.find_syntax_by_extension(l))
        });
        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let (Some(syntax), Some(theme)) = (syntax, theme) else {
            return plain();
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(label),
                highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", label, e);
                plain()
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Push `text`, wrapping any bare URLs it contains in autolinks
fn push_linkified<'a>(events: &mut Vec<Event<'a>>, text: CowStr<'a>) {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);

    if finder.links(&text).next().is_none() {
        events.push(Event::Text(text));
        return;
    }

    for span in finder.spans(&text) {
        let piece = CowStr::from(span.as_str().to_string());
        match span.kind() {
            Some(LinkKind::Url) => {
                events.push(Event::Start(Tag::Link {
                    link_type: LinkType::Autolink,
                    dest_url: safe_url(piece.clone()),
                    title: CowStr::Borrowed(""),
                    id: CowStr::Borrowed(""),
                }));
                events.push(Event::Text(piece));
                events.push(Event::End(TagEnd::Link));
            }
            _ => events.push(Event::Text(piece)),
        }
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim_start().to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
