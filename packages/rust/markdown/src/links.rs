//! Link repair for generator output.
//!
//! The client generator emits navigation links with doubled brackets that point
//! at a `README.md` outside the subsite. Each pass rewrites one family of those
//! literals; anything else in the body is left untouched.

use tracing::debug;

/// Navigation links that should point back at the subsite index.
///
/// `(broken literal, link label)`.
const INDEX_LINKS: [(&str, &str); 3] = [
    (
        "[[Back to API list]](../README.md#documentation-for-api-endpoints)",
        "Back to API list",
    ),
    (
        "[[Back to Model list]](../README.md#documentation-for-models)",
        "Back to Model list",
    ),
    ("[[Back to README]](../README.md)", "Back to README"),
];

const BROKEN_BACK_TO_TOP: &str = "[[Back to top]](#)";
const BACK_TO_TOP: &str = "[Back to top](#)";

/// Rewrite the known broken navigation links in `body`.
///
/// `index_url` is the site-relative link to the subsite index
/// (e.g. `{{ site.baseurl }}/api-client/`).
pub fn repair_links(body: &str, index_url: &str) -> String {
    let mut result = fix_back_to_top(body);
    result = fix_index_links(&result, index_url);
    result
}

// ---------------------------------------------------------------------------
// Pass 1: in-page anchor
// ---------------------------------------------------------------------------

fn fix_back_to_top(md: &str) -> String {
    md.replace(BROKEN_BACK_TO_TOP, BACK_TO_TOP)
}

// ---------------------------------------------------------------------------
// Pass 2: links into the generator's README
// ---------------------------------------------------------------------------

fn fix_index_links(md: &str, index_url: &str) -> String {
    let mut result = md.to_string();

    for (broken, label) in INDEX_LINKS {
        let hits = result.matches(broken).count();
        if hits == 0 {
            continue;
        }
        result = result.replace(broken, &format!("[{label}]({index_url})"));
        debug!(label, hits, "rewrote index link");
    }

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "{{ site.baseurl }}/api-client/";

    #[test]
    fn back_to_top_loses_extra_brackets() {
        let input = "Intro\n\n[[Back to top]](#) [link](Other.md)\n";
        let result = repair_links(input, INDEX);
        assert_eq!(result, "Intro\n\n[Back to top](#) [link](Other.md)\n");
    }

    #[test]
    fn api_list_points_at_index() {
        let input = "[[Back to API list]](../README.md#documentation-for-api-endpoints)";
        assert_eq!(
            repair_links(input, INDEX),
            "[Back to API list]({{ site.baseurl }}/api-client/)"
        );
    }

    #[test]
    fn model_list_and_readme_point_at_index() {
        let input = "[[Back to Model list]](../README.md#documentation-for-models) \
                     [[Back to README]](../README.md)";
        let result = repair_links(input, INDEX);
        assert_eq!(
            result,
            "[Back to Model list]({{ site.baseurl }}/api-client/) \
             [Back to README]({{ site.baseurl }}/api-client/)"
        );
    }

    #[test]
    fn every_occurrence_is_rewritten() {
        let input = "[[Back to top]](#)\n\n[[Back to top]](#)";
        assert_eq!(repair_links(input, INDEX), "[Back to top](#)\n\n[Back to top](#)");
    }

    #[test]
    fn other_relative_links_untouched() {
        let input = "[AddressResource](AddressResource.md) [README](../README.md) [[x]](#)";
        assert_eq!(repair_links(input, INDEX), input);
    }
}
