//! Markup for the author table, its pagination block and the page shell.
//!
//! Each render function is a pure function of its inputs, so the same
//! authors and page request always produce the same markup.

use askama::Template;

use crate::constants::AUTHORS_PAGE_ENDPOINT;
use crate::models::{Author, AuthorsPageFragments};
use crate::services::pagination::{NavControl, PageLink, PageRequest, PagerItem, PaginationControls};

pub const SCRIPT_URL: &str = "/assets/js/author-table-script.js";
pub const STYLESHEET_URL: &str = "/assets/css/author-table-styles.css";

const BTN_CLASS: &str = "ait-pagination__btn";
const BTN_DISABLED_CLASS: &str = "ait-pagination__btn ait-pagination__btn--disabled";
const NUMBER_CLASS: &str = "ait-pagination__number";
const NUMBER_ACTIVE_CLASS: &str = "ait-pagination__number ait-pagination__number--active";

impl NavControl {
    pub fn css_class(&self) -> &'static str {
        if self.disabled {
            BTN_DISABLED_CLASS
        } else {
            BTN_CLASS
        }
    }
}

impl PageLink {
    pub fn css_class(&self) -> &'static str {
        if self.active {
            NUMBER_ACTIVE_CLASS
        } else {
            NUMBER_CLASS
        }
    }
}

struct AuthorRow<'a> {
    display_name: &'a str,
    email: &'a str,
    post_count: u64,
    joining_date: String,
}

impl<'a> From<&'a Author> for AuthorRow<'a> {
    fn from(author: &'a Author) -> Self {
        Self {
            display_name: &author.display_name,
            email: &author.email,
            post_count: author.post_count,
            joining_date: author.joining_date(),
        }
    }
}

#[derive(Template)]
#[template(path = "author_table.html")]
struct AuthorTableTemplate<'a> {
    rows: Vec<AuthorRow<'a>>,
}

#[derive(Template)]
#[template(path = "pagination.html")]
struct PaginationTemplate<'a> {
    controls: &'a PaginationControls,
}

#[derive(Template)]
#[template(path = "shortcode.html")]
struct ShortcodeTemplate<'a> {
    table: &'a str,
    pagination: &'a str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    content: &'a str,
    endpoint: &'a str,
    script_url: &'a str,
    stylesheet_url: &'a str,
}

/// Table holding the authors visible on the requested page.
pub fn render_author_table(authors: &[Author], request: PageRequest) -> askama::Result<String> {
    AuthorTableTemplate {
        rows: request.slice(authors).iter().map(AuthorRow::from).collect(),
    }
    .render()
}

/// Pagination block for `total_count` authors.
pub fn render_pagination(total_count: usize, request: PageRequest) -> askama::Result<String> {
    PaginationTemplate {
        controls: &PaginationControls::new(total_count, request),
    }
    .render()
}

/// Both fragments returned by the page action.
pub fn render_fragments(
    authors: &[Author],
    request: PageRequest,
) -> askama::Result<AuthorsPageFragments> {
    Ok(AuthorsPageFragments {
        html: render_author_table(authors, request)?,
        pagination: render_pagination(authors.len(), request)?,
    })
}

/// Container plus pagination, the markup a shortcode expands to.
pub fn render_shortcode(authors: &[Author], request: PageRequest) -> askama::Result<String> {
    let fragments = render_fragments(authors, request)?;
    ShortcodeTemplate {
        table: &fragments.html,
        pagination: &fragments.pagination,
    }
    .render()
}

/// Full HTML document around already expanded page content.
pub fn render_index(title: &str, content: &str) -> askama::Result<String> {
    IndexTemplate {
        title,
        content,
        endpoint: AUTHORS_PAGE_ENDPOINT,
        script_url: SCRIPT_URL,
        stylesheet_url: STYLESHEET_URL,
    }
    .render()
}
