//! Per-site selector tables
//!
//! Candidates are ordered most specific first. New markup variants are
//! supported by adding candidates here, not by branching in the walker.

use crate::extract::fields::{Field, SelectorChain, SelectorTable};

/// Listing item containers on cnblogs.com
pub const CNBLOGS_ITEMS: &[&str] = &["article.post-item", ".post-item", ".day .postCon"];

/// Fields of one item on a cnblogs.com listing page
pub static CNBLOGS_LISTING: SelectorTable = SelectorTable {
    entries: &[
        (
            Field::Title,
            SelectorChain::text(&["a.post-item-title", ".post-item-title", ".postTitle a", "h3", ".title"]),
        ),
        (
            Field::Link,
            SelectorChain::attr(&["a.post-item-title", ".postTitle a", "h3 a", "a"], "href"),
        ),
        (
            Field::Author,
            SelectorChain::text(&["a.post-item-author span", "a.post-item-author", ".post-item-foot .author"]),
        ),
        (
            Field::AuthorLink,
            SelectorChain::attr(&["a.post-item-author", ".post-item-foot a.author"], "href"),
        ),
        (
            Field::PublishDate,
            SelectorChain::text(&[
                ".post-item-foot .post-meta-item span",
                ".post-meta-item span",
                ".postDesc",
                "time",
                ".date",
            ]),
        ),
        (
            Field::Content,
            SelectorChain::text(&["p.post-item-summary", ".post-item-summary", ".c_b_p_desc", "p"]),
        ),
        (
            Field::ReadCount,
            SelectorChain::text(&[
                "a.post-meta-item[title*='阅读'] span",
                ".post-view-count",
                ".article_view",
            ]),
        ),
        (
            Field::CommentCount,
            SelectorChain::text(&[
                "a.post-meta-item[href*='#commentform'] span",
                ".post-comment-count",
                ".article_comment",
            ]),
        ),
    ],
};

/// Fields of a cnblogs.com post page
pub static CNBLOGS_DETAIL: SelectorTable = SelectorTable {
    entries: &[
        (
            Field::Title,
            SelectorChain::text(&["#cb_post_title_url", ".postTitle a", "h1", "h2", ".title"]),
        ),
        (
            Field::PublishDate,
            SelectorChain::text(&["#post-date", ".postDesc span", "time", ".date", ".timestamp"]),
        ),
        (
            Field::Author,
            SelectorChain::text(&["#Header1_HeaderTitle", "#profile_block a", ".postDesc a"]),
        ),
        (
            Field::AuthorLink,
            SelectorChain::attr(&["#Header1_HeaderTitle", "#profile_block a"], "href"),
        ),
        (
            Field::Content,
            SelectorChain::text(&["#cnblogs_post_body", ".postBody", ".blogpost-body", "article"]),
        ),
        (Field::ReadCount, SelectorChain::text(&["#post_view_count"])),
        (Field::CommentCount, SelectorChain::text(&["#post_comment_count"])),
    ],
};

/// Listing item containers for generic blog layouts
pub const GENERIC_ITEMS: &[&str] = &["article", ".post", ".article"];

/// Fields of one item on a generic blog listing
pub static GENERIC_LISTING: SelectorTable = SelectorTable {
    entries: &[
        (Field::Title, SelectorChain::text(&["h1", "h2", ".title"])),
        (
            Field::PublishDate,
            SelectorChain::text(&["time", ".date", ".timestamp"]),
        ),
        (Field::Link, SelectorChain::attr(&["a"], "href")),
        (
            Field::Author,
            SelectorChain::text(&[".author", "[rel='author']", ".byline"]),
        ),
        (
            Field::AuthorLink,
            SelectorChain::attr(&["a[rel='author']", ".author a", "a.author"], "href"),
        ),
        (
            Field::Content,
            SelectorChain::text(&[".summary", ".excerpt", ".post-excerpt", "p"]),
        ),
    ],
};

/// Fields of a generic single-post page
pub static GENERIC_DETAIL: SelectorTable = SelectorTable {
    entries: &[
        (
            Field::Title,
            SelectorChain::text(&["article h1", "h1", ".post-title", ".title", "title"]),
        ),
        (
            Field::PublishDate,
            SelectorChain::text(&["time", ".date", ".timestamp"]),
        ),
        (
            Field::Author,
            SelectorChain::text(&[".author", "[rel='author']", ".byline"]),
        ),
        (
            Field::AuthorLink,
            SelectorChain::attr(&["a[rel='author']", ".author a", "a.author"], "href"),
        ),
        (
            Field::Content,
            SelectorChain::text(&[".post-content", ".entry-content", "article", "main"]),
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fields::extract;
    use crate::extract::item_fragments;
    use scraper::{Html, Selector};

    #[test]
    fn test_all_selectors_parse() {
        let tables = [&CNBLOGS_LISTING, &CNBLOGS_DETAIL, &GENERIC_LISTING, &GENERIC_DETAIL];
        for table in tables {
            for (field, chain) in table.entries {
                for candidate in chain.candidates {
                    assert!(
                        Selector::parse(candidate).is_ok(),
                        "invalid selector for {}: {}",
                        field,
                        candidate
                    );
                }
            }
        }

        for container in CNBLOGS_ITEMS.iter().chain(GENERIC_ITEMS) {
            assert!(Selector::parse(container).is_ok(), "invalid container {}", container);
        }
    }

    #[test]
    fn test_cnblogs_listing_item() {
        let html = r##"
            <html><body><div id="post_list">
            <article class="post-item">
                <section class="post-item-body">
                    <div class="post-item-text">
                        <a class="post-item-title" href="https://www.cnblogs.com/alice/p/1.html">Rust 所有权</a>
                        <p class="post-item-summary">所有权是 Rust 最独特的特性。</p>
                    </div>
                    <footer class="post-item-foot">
                        <a href="/u/alice" class="post-item-author"><span>alice</span></a>
                        <span class="post-meta-item"><span>2024-05-01 10:00</span></span>
                        <a class="post-meta-item btn" href="https://www.cnblogs.com/alice/p/1.html#commentform"><span>7</span></a>
                        <a class="post-meta-item btn" title="阅读 1024"><span>1024</span></a>
                    </footer>
                </section>
            </article>
            </div></body></html>
        "##;
        let document = Html::parse_document(html);
        let items = item_fragments(&document, CNBLOGS_ITEMS);
        assert_eq!(items.len(), 1);

        let item = items[0];
        assert_eq!(extract(item, Field::Title, &CNBLOGS_LISTING), "Rust 所有权");
        assert_eq!(
            extract(item, Field::Link, &CNBLOGS_LISTING),
            "https://www.cnblogs.com/alice/p/1.html"
        );
        assert_eq!(extract(item, Field::Author, &CNBLOGS_LISTING), "alice");
        assert_eq!(extract(item, Field::AuthorLink, &CNBLOGS_LISTING), "/u/alice");
        assert_eq!(
            extract(item, Field::PublishDate, &CNBLOGS_LISTING),
            "2024-05-01 10:00"
        );
        assert_eq!(extract(item, Field::CommentCount, &CNBLOGS_LISTING), "7");
        assert_eq!(extract(item, Field::ReadCount, &CNBLOGS_LISTING), "1024");
    }

    #[test]
    fn test_cnblogs_detail_page() {
        let html = r#"
            <html><body>
                <a id="Header1_HeaderTitle" href="https://www.cnblogs.com/alice/">alice</a>
                <h1 class="postTitle"><a id="cb_post_title_url" href="/alice/p/1.html"><span>Rust 所有权</span></a></h1>
                <div id="cnblogs_post_body"><p>正文内容</p></div>
                <div class="postDesc">posted @ <span id="post-date">2024-05-01 10:00</span>
                    阅读(<span id="post_view_count">1024</span>)
                    评论(<span id="post_comment_count">7</span>)
                </div>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let root = document.root_element();

        assert_eq!(extract(root, Field::Title, &CNBLOGS_DETAIL), "Rust 所有权");
        assert_eq!(extract(root, Field::PublishDate, &CNBLOGS_DETAIL), "2024-05-01 10:00");
        assert_eq!(extract(root, Field::Author, &CNBLOGS_DETAIL), "alice");
        assert_eq!(extract(root, Field::Content, &CNBLOGS_DETAIL), "正文内容");
        assert_eq!(extract(root, Field::ReadCount, &CNBLOGS_DETAIL), "1024");
        assert_eq!(extract(root, Field::CommentCount, &CNBLOGS_DETAIL), "7");
    }

    #[test]
    fn test_generic_listing_item() {
        let html = r#"
            <html><body>
                <article>
                    <h2><a href="/2024/05/hello/">Hello World</a></h2>
                    <time datetime="2024-05-01">May 1, 2024</time>
                </article>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let items = item_fragments(&document, GENERIC_ITEMS);
        assert_eq!(items.len(), 1);

        assert_eq!(extract(items[0], Field::Title, &GENERIC_LISTING), "Hello World");
        assert_eq!(extract(items[0], Field::PublishDate, &GENERIC_LISTING), "May 1, 2024");
        assert_eq!(extract(items[0], Field::Link, &GENERIC_LISTING), "/2024/05/hello/");
        assert_eq!(extract(items[0], Field::ReadCount, &GENERIC_LISTING), "0");
    }
}
