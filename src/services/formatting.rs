//! Markdown-to-HTML reformatting of upstream answer text.
//!
//! This is a deliberately simple, ordered string substitution: only opening
//! tags are emitted and markers are replaced globally. Order matters because
//! markers overlap (`###` contains `##` contains `#`, `**` contains `*`).

/// Opening wrapper carrying the font and line-height styling.
const WRAPPER_OPEN: &str = "<div style='font-size:16px; line-height:1.6;'>";
const WRAPPER_CLOSE: &str = "</div>";

/// Convert markdown-style markers in `text` to HTML and wrap the result in
/// the styling container.
pub fn render_html(text: &str) -> String {
    let body = text
        .replace("###", "<h3>")
        .replace("##", "<h2>")
        .replace('#', "<h1>")
        .replace("**", "<b>")
        .replace('*', "<i>")
        .replace('\n', "<br>")
        .replace('-', "•");

    format!("{}{}{}", WRAPPER_OPEN, body, WRAPPER_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(body: &str) -> String {
        format!("{}{}{}", WRAPPER_OPEN, body, WRAPPER_CLOSE)
    }

    #[test]
    fn heading_markers_are_matched_longest_first() {
        assert_eq!(render_html("### Deep"), wrapped("<h3> Deep"));
        assert_eq!(render_html("## Mid"), wrapped("<h2> Mid"));
        assert_eq!(render_html("# Top"), wrapped("<h1> Top"));
    }

    #[test]
    fn bold_marker_is_consumed_before_italic() {
        // Both occurrences of ** become <b>; no * remains for the italic pass.
        assert_eq!(render_html("**Hello** world"), wrapped("<b>Hello<b> world"));
        assert_eq!(render_html("*em*"), wrapped("<i>em<i>"));
    }

    #[test]
    fn newlines_become_breaks_and_hyphens_become_bullets() {
        assert_eq!(
            render_html("**Hello** world\n- item"),
            wrapped("<b>Hello<b> world<br>• item")
        );
    }

    #[test]
    fn hyphens_are_replaced_everywhere_even_mid_word() {
        // Known quirk of the global substitution, kept for compatibility.
        assert_eq!(render_html("e-mail"), wrapped("e•mail"));
    }

    #[test]
    fn plain_text_only_gains_the_wrapper() {
        assert_eq!(render_html("hello"), wrapped("hello"));
    }
}
