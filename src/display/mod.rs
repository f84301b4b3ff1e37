//! Text formatting for posts and publications in the terminal

use jiff::Timestamp;
use jiff::tz::TimeZone;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::collection::PageView;
use crate::entity::{Post, Publication};

/// Longest description shown in a list row
const DESCRIPTION_WIDTH: usize = 48;

/// Format an ISO 8601 date as `16 Oct 2026, 3:04 pm` in the local zone.
///
/// Values that do not parse are shown as-is.
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &TimeZone::system())
}

pub fn format_date_in(raw: &str, tz: &TimeZone) -> String {
    match raw.trim().parse::<Timestamp>() {
        Ok(ts) => ts
            .to_zoned(tz.clone())
            .strftime("%-d %b %Y, %-I:%M %P")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Shorten `text` to at most `width` characters, marking the cut
pub fn truncate(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        return flat;
    }
    let kept: String = flat.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// The footer under a list page
pub fn format_page_footer(page: usize, page_count: usize, total: usize) -> String {
    let noun = if total == 1 { "result" } else { "results" };
    format!("page {page} of {page_count} ({total} {noun})")
}

pub const NO_RESULTS: &str = "No results found.";

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Author")]
    author: String,
}

#[derive(Tabled)]
struct PublicationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render a page of posts as a table, or the empty-result message
pub fn format_post_page(view: &PageView<'_, Post>) -> String {
    if view.is_empty_result() {
        return NO_RESULTS.to_string();
    }

    let rows: Vec<PostRow> = view
        .items
        .iter()
        .map(|p| PostRow {
            id: p.id.clone(),
            title: p.title.clone(),
            category: p.category.clone(),
            date: format_date(&p.date),
            author: p.author.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!(
        "{}\n{}",
        table,
        format_page_footer(view.page, view.page_count, view.total).dimmed()
    )
}

/// Render a page of publications as a table, or the empty-result message
pub fn format_publication_page(view: &PageView<'_, Publication>) -> String {
    if view.is_empty_result() {
        return NO_RESULTS.to_string();
    }

    let rows: Vec<PublicationRow> = view
        .items
        .iter()
        .map(|p| PublicationRow {
            id: p.id.clone(),
            name: p.name.clone(),
            description: truncate(&p.description, DESCRIPTION_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!(
        "{}\n{}",
        table,
        format_page_footer(view.page, view.page_count, view.total).dimmed()
    )
}

/// Full view of a single post; `image_url` is the resolved asset URL
pub fn format_post_detail(post: &Post, image_url: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", post.title.bold()));
    out.push_str(&format!(
        "{} | {} | {}\n",
        post.category.cyan(),
        format_date(&post.date),
        post.author
    ));
    out.push_str(&format!("{}\n", image_url.dimmed()));
    if !post.description.is_empty() {
        out.push_str(&format!("\n{}\n", post.description.italic()));
    }
    if !post.content.is_empty() {
        out.push_str(&format!("\n{}\n", post.content));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_in_utc() {
        assert_eq!(
            format_date_in("2026-10-16T15:04:00Z", &TimeZone::UTC),
            "16 Oct 2026, 3:04 pm"
        );
        assert_eq!(
            format_date_in("2024-07-04T09:30:00.000Z", &TimeZone::UTC),
            "4 Jul 2024, 9:30 am"
        );
    }

    #[test]
    fn test_format_date_keeps_unparsable() {
        assert_eq!(format_date_in("yesterday", &TimeZone::UTC), "yesterday");
        assert_eq!(format_date_in("", &TimeZone::UTC), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a  b\nc", 10), "a b c");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn test_page_footer() {
        assert_eq!(format_page_footer(2, 3, 9), "page 2 of 3 (9 results)");
        assert_eq!(format_page_footer(1, 1, 1), "page 1 of 1 (1 result)");
    }

    #[test]
    fn test_empty_page_shows_no_results() {
        let posts: Vec<Post> = Vec::new();
        let view = crate::collection::paginate(
            &posts,
            &crate::collection::ListQuery {
                search: "",
                category: None,
                page: 1,
                page_size: 6,
            },
        );
        assert_eq!(format_post_page(&view), NO_RESULTS);
    }
}
